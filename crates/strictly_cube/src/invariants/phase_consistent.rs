//! Phase consistency invariant: the phase agrees with a full rescan.

use super::Invariant;
use crate::engine::{GameEngine, Phase};
use crate::rules::{check_winner, is_full};
use crate::rules::win::line_owned_by;

/// Invariant: the recorded phase matches the board.
///
/// - `InProgress`: no completed line and at least one empty cell
/// - `Won`: the recorded line is a catalog line held by the winner
/// - `Draw`: the board is full and no line is completed
pub struct PhaseConsistentInvariant;

impl Invariant<GameEngine> for PhaseConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let catalog = engine.catalog();
        match engine.phase() {
            Phase::InProgress => !is_full(board) && check_winner(board, catalog).is_none(),
            Phase::Won { winner, line } => {
                catalog.lines().contains(line) && line_owned_by(board, line, *winner)
            }
            Phase::Draw => is_full(board) && check_winner(board, catalog).is_none(),
        }
    }

    fn description() -> &'static str {
        "Phase agrees with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Player};

    #[test]
    fn test_holds_after_win() {
        let mut engine = GameEngine::new(3).unwrap();
        for coord in [(0, 0, 0), (2, 0, 0), (1, 1, 0), (2, 1, 0), (2, 2, 0)] {
            engine.apply_move(coord.into()).unwrap();
        }
        assert_eq!(engine.phase().winner(), Some(Player::X));
        assert!(PhaseConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_unnoticed_line_violates() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.apply_move(Coord::new(0, 0, 0)).unwrap();
        engine.board_mut().set(Coord::new(0, 0, 1), Player::X).unwrap();
        engine.board_mut().set(Coord::new(0, 0, 2), Player::X).unwrap();
        assert!(!PhaseConsistentInvariant::holds(&engine));
    }
}
