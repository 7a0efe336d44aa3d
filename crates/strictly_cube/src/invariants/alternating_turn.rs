//! Alternating turn invariant: players alternate, starting with the
//! configured first player.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: players alternate turns.
///
/// History must read `s, s', s, s', ...` where `s` is the starting player.
/// While the game is in progress the player on turn follows the parity of
/// the history; once won, the winner stays on turn.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let starting = engine.starting_player();

        if history.first().is_some_and(|first| first.player != starting) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match history.last() {
            None => engine.current_player() == starting,
            Some(last) if engine.phase().is_over() => engine.current_player() == last.player,
            Some(last) => engine.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
