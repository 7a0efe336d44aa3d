//! History consistency invariant: history matches the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: every filled cell has a history entry and vice versa.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        board.filled() == engine.history().len()
            && engine
                .history()
                .iter()
                .all(|mov| board.get(mov.coord) == Ok(Cell::Occupied(mov.player)))
    }

    fn description() -> &'static str {
        "History is consistent with the board"
    }
}
