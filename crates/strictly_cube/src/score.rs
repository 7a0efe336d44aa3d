//! Running score across games played on one engine.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Wins per player and draws since the engine was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Finished games of any outcome.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player X: {} - Player O: {} (draws: {})",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
