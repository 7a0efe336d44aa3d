//! Win detection for cubic tic-tac-toe.

use crate::board::Board;
use crate::lines::{Line, WinLineCatalog};
use crate::types::{Cell, Coord, Player};
use tracing::instrument;

/// Checks if every cell of `line` holds `player`.
///
/// Stops at the first mismatch.
pub fn line_owned_by(board: &Board, line: &Line, player: Player) -> bool {
    line.cells()
        .iter()
        .all(|c| board.get(*c) == Ok(Cell::Occupied(player)))
}

/// Scans every line of the catalog for a winner.
///
/// Returns the first monochrome line in catalog order. This is the
/// full-board check; the engine uses [`winning_line_through`] instead.
#[instrument(skip_all, fields(size = board.size()))]
pub fn check_winner<'a>(board: &Board, catalog: &'a WinLineCatalog) -> Option<(Player, &'a Line)> {
    catalog.lines().iter().find_map(|line| {
        let owner = board.get(line.cells()[0]).ok()?.player()?;
        line_owned_by(board, line, owner).then_some((owner, line))
    })
}

/// Finds the first line through `coord` fully held by `player`.
///
/// Only lines through the last move can have been completed by it, so
/// this is all the engine needs after each move.
#[instrument(skip(board, catalog))]
pub fn winning_line_through<'a>(
    board: &Board,
    catalog: &'a WinLineCatalog,
    coord: Coord,
    player: Player,
) -> Option<&'a Line> {
    catalog
        .lines_through(coord)
        .find(|line| line_owned_by(board, line, player))
}
