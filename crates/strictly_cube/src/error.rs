//! Errors raised by the board, the line catalog and the engine.

use crate::types::{Coord, Player};

/// Error that can occur when building a game or applying a move.
///
/// Every variant except `InvalidBoardSize` is recoverable: the caller
/// re-prompts and issues a corrected move. None of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board size outside the supported range.
    #[display("Board size {} is not supported (must be 3..=16)", _0)]
    InvalidBoardSize(usize),

    /// A serialized board whose cell list does not cover the cube.
    #[display("Board of size {size} needs {expected} cells, got {found}")]
    CellCountMismatch {
        /// Edge length claimed by the board.
        size: usize,
        /// `size³`.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },

    /// Coordinate lies outside the cube.
    #[display("Coordinate {} is out of range", _0)]
    OutOfRange(Coord),

    /// Move targets a coordinate outside the cube.
    #[display("Invalid move at {}: outside the board", _0)]
    InvalidMove(Coord),

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A replayed move belongs to the player not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for GameError {}
