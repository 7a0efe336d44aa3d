//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::board::Board;
use crate::engine::GameEngine;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed at every
/// step and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new(engine.size());
        for mov in engine.history() {
            if reconstructed.set(mov.coord, mov.player).is_err() {
                return false;
            }
        }
        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
