//! N×N×N board storage.

use crate::error::GameError;
use crate::types::{Cell, Coord, Player};
use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Flat index `(x * N + y) * N + z` of a coordinate, if it lies inside an
/// N×N×N cube.
pub(crate) fn flat_index(size: usize, coord: Coord) -> Option<usize> {
    (coord.x < size && coord.y < size && coord.z < size)
        .then(|| (coord.x * size + coord.y) * size + coord.z)
}

/// Cubic tic-tac-toe board.
///
/// Cells are stored flat at index `(x * N + y) * N + z`. Boards are built
/// by the engine for a validated size; deserialized boards are checked
/// against the same bounds and must hold exactly `N³` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardCells")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardCells {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardCells> for Board {
    type Error = GameError;

    fn try_from(raw: BoardCells) -> Result<Self, Self::Error> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&raw.size) {
            return Err(GameError::InvalidBoardSize(raw.size));
        }
        let expected = raw.size.pow(3);
        if raw.cells.len() != expected {
            return Err(GameError::CellCountMismatch {
                size: raw.size,
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Creates an empty board with edge length `size`.
    ///
    /// Callers validate `size` first (see [`crate::WinLineCatalog::new`]).
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.pow(3)],
        }
    }

    /// Edge length of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the coordinate lies inside the cube.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size && coord.z < self.size
    }

    /// Flat index of an in-bounds coordinate.
    pub fn index(&self, coord: Coord) -> Option<usize> {
        flat_index(self.size, coord)
    }

    /// Coordinate stored at a flat index.
    pub fn coord_at(&self, index: usize) -> Coord {
        let n = self.size;
        Coord::new(index / (n * n), (index / n) % n, index % n)
    }

    /// Gets the occupant of a cell.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfRange` for coordinates outside the cube.
    pub fn get(&self, coord: Coord) -> Result<Cell, GameError> {
        self.index(coord)
            .map(|i| self.cells[i])
            .ok_or(GameError::OutOfRange(coord))
    }

    /// Places `player` on an empty cell.
    ///
    /// # Errors
    ///
    /// `InvalidMove` if the coordinate is outside the cube, `CellOccupied`
    /// if the cell already holds a mark. The board is unchanged on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn set(&mut self, coord: Coord, player: Player) -> Result<(), GameError> {
        let index = self.index(coord).ok_or(GameError::InvalidMove(coord))?;
        match self.cells[index] {
            Cell::Empty => {
                self.cells[index] = Cell::Occupied(player);
                Ok(())
            }
            Cell::Occupied(_) => Err(GameError::CellOccupied(coord)),
        }
    }

    /// Checks if a cell is empty. Out-of-range cells are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every coordinate of the cube in index order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_at(i))
    }

    /// Empty coordinates in index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| self.coord_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.cells().len(), 27);
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3);
        board.set(Coord::new(1, 2, 0), Player::O).unwrap();
        assert_eq!(
            board.get(Coord::new(1, 2, 0)),
            Ok(Cell::Occupied(Player::O))
        );
        assert_eq!(board.get(Coord::new(0, 0, 0)), Ok(Cell::Empty));
        assert_eq!(board.count(Player::O), 1);
    }

    #[test]
    fn test_set_out_of_range_is_invalid_move() {
        let mut board = Board::new(3);
        let coord = Coord::new(3, 0, 0);
        assert_eq!(board.set(coord, Player::X), Err(GameError::InvalidMove(coord)));
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new(4);
        let coord = Coord::new(0, 4, 1);
        assert_eq!(board.get(coord), Err(GameError::OutOfRange(coord)));
        assert!(!board.is_empty(coord));
    }

    #[test]
    fn test_set_occupied_leaves_cell_unchanged() {
        let mut board = Board::new(3);
        let coord = Coord::new(1, 1, 1);
        board.set(coord, Player::X).unwrap();
        assert_eq!(board.set(coord, Player::O), Err(GameError::CellOccupied(coord)));
        assert_eq!(board.get(coord), Ok(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new(3);
        let coords: Vec<_> = board.coords().collect();
        for (i, coord) in coords.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.set(coord, player).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);

        board.reset();
        assert_eq!(board.filled(), 0);
        assert_eq!(board.empty_cells().count(), 27);
    }

    #[test]
    fn test_deserialize_rejects_short_cell_list() {
        let result = serde_json::from_str::<Board>(r#"{"size":3,"cells":["Empty"]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("needs 27 cells, got 1"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_unsupported_size() {
        let json = r#"{"size":18446744073709551615,"cells":[]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err().to_string();
        assert!(err.contains("not supported"), "{err}");
        assert!(serde_json::from_str::<Board>(r#"{"size":2,"cells":[]}"#).is_err());
    }

    #[test]
    fn test_deserialized_board_answers_every_cell() {
        let mut board = Board::new(3);
        board.set(Coord::new(2, 2, 2), Player::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert_eq!(back.get(Coord::new(2, 2, 2)), Ok(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_index_roundtrip_covers_cube() {
        let board = Board::new(4);
        for (i, coord) in board.coords().enumerate() {
            assert_eq!(board.index(coord), Some(i));
        }
    }
}
