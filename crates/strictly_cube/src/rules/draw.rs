//! Draw detection for cubic tic-tac-toe.

use super::win::check_winner;
use crate::board::Board;
use crate::lines::WinLineCatalog;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is full with no winning line.
#[instrument(skip_all)]
pub fn is_draw(board: &Board, catalog: &WinLineCatalog) -> bool {
    is_full(board) && check_winner(board, catalog).is_none()
}
