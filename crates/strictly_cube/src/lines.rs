//! Win-line catalog for an N×N×N cube.
//!
//! A winning line is a maximal run of N collinear, evenly spaced cells.
//! Lines are generated once per board size from the 13 canonical step
//! directions and indexed by the cells they pass through, so a move only
//! has to inspect the lines crossing its own cell.

use crate::board::{Board, flat_index};
use crate::error::GameError;
use crate::types::Coord;
use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Family of a line, by the number of axes its direction moves along.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum LineFamily {
    /// Rows, columns and pillars.
    #[strum(to_string = "axis")]
    Axis,
    /// Diagonals of a single plane.
    #[strum(to_string = "face diagonal")]
    FaceDiagonal,
    /// Corner-to-corner diagonals through the cube.
    #[strum(to_string = "space diagonal")]
    SpaceDiagonal,
}

impl LineFamily {
    /// Number of non-zero components of directions in this family.
    pub fn moving_axes(self) -> u32 {
        match self {
            LineFamily::Axis => 1,
            LineFamily::FaceDiagonal => 2,
            LineFamily::SpaceDiagonal => 3,
        }
    }
}

/// Canonical step direction: a non-zero vector in `{-1, 0, 1}³` whose first
/// non-zero component is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction([i8; 3]);

impl Direction {
    /// Wraps a step vector, returning `None` unless it is canonical.
    pub fn new(step: [i8; 3]) -> Option<Self> {
        if step.iter().any(|d| !(-1..=1).contains(d)) {
            return None;
        }
        match step.iter().find(|d| **d != 0) {
            Some(first) if *first > 0 => Some(Self(step)),
            _ => None,
        }
    }

    /// The step vector.
    pub fn step(self) -> [i8; 3] {
        self.0
    }

    /// Family of lines running in this direction.
    pub fn family(self) -> LineFamily {
        match self.0.iter().filter(|d| **d != 0).count() {
            1 => LineFamily::Axis,
            2 => LineFamily::FaceDiagonal,
            _ => LineFamily::SpaceDiagonal,
        }
    }

    /// All canonical directions, grouped by family.
    pub fn canonical() -> Vec<Direction> {
        let mut directions: Vec<Direction> = (-1..=1)
            .flat_map(|dx| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dz| [dx, dy, dz])))
            .filter_map(Direction::new)
            .collect();
        directions.sort_by_key(|d| d.family());
        directions
    }
}

/// One winning line: N cells in order along `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    direction: Direction,
    cells: Vec<Coord>,
}

impl Line {
    /// Direction from the first cell to the last.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells in order, starting at the minimal end.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells (always the board size).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Lines are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks whether the line passes through `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Every winning line of one board size, plus a per-cell membership index.
///
/// Only `size` is read back on deserialization; the lines and the index are
/// regenerated, so a deserialized catalog is always a valid one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogSize")]
pub struct WinLineCatalog {
    size: usize,
    lines: Vec<Line>,
    /// For each flat cell index, ascending catalog indices of lines through it.
    through: Vec<Vec<usize>>,
}

#[derive(Deserialize)]
struct CatalogSize {
    size: usize,
}

impl TryFrom<CatalogSize> for WinLineCatalog {
    type Error = GameError;

    fn try_from(raw: CatalogSize) -> Result<Self, Self::Error> {
        Self::new(raw.size)
    }
}

impl WinLineCatalog {
    /// Generates the catalog for an N×N×N board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` unless
    /// `MIN_BOARD_SIZE <= size <= MAX_BOARD_SIZE`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }

        let board = Board::new(size);
        let last = size as isize - 1;
        let mut lines = Vec::with_capacity(Self::expected_len(size));
        let mut through = vec![Vec::new(); board.cells().len()];

        for direction in Direction::canonical() {
            let step = direction.step();
            for origin in board.coords() {
                // Origin must be the minimal end: one step back leaves the cube.
                let extends_back = origin
                    .offset(step, -1)
                    .is_some_and(|before| board.in_bounds(before));
                if extends_back {
                    continue;
                }
                let reaches_end = origin
                    .offset(step, last)
                    .is_some_and(|end| board.in_bounds(end));
                if !reaches_end {
                    continue;
                }

                let cells: Vec<Coord> = (0..size as isize)
                    .filter_map(|t| origin.offset(step, t))
                    .collect();
                let line_index = lines.len();
                for cell in &cells {
                    if let Some(i) = board.index(*cell) {
                        through[i].push(line_index);
                    }
                }
                lines.push(Line { direction, cells });
            }
        }

        debug!(size, lines = lines.len(), "Generated win-line catalog");
        Ok(Self {
            size,
            lines,
            through,
        })
    }

    /// Closed-form line count for an N×N×N board: `3N² + 6N + 4`.
    ///
    /// A direction moving along `k` axes admits `N^(3-k)` maximal lines.
    pub fn expected_len(size: usize) -> usize {
        3 * size * size + 6 * size + 4
    }

    /// Edge length this catalog was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All lines in generation order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// A catalog is never empty for supported sizes.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line by catalog index.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Lines passing through `coord`, in catalog order.
    ///
    /// Out-of-range coordinates have no lines.
    pub fn lines_through(&self, coord: Coord) -> impl Iterator<Item = &Line> + '_ {
        let indices: &[usize] = flat_index(self.size, coord)
            .and_then(|i| self.through.get(i))
            .map_or(&[][..], |lines| lines.as_slice());
        indices.iter().map(move |i| &self.lines[*i])
    }

    /// Number of lines belonging to `family`.
    pub fn count_by_family(&self, family: LineFamily) -> usize {
        self.lines
            .iter()
            .filter(|line| line.direction.family() == family)
            .count()
    }
}
