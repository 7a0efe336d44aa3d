//! First-class move type.
//!
//! Moves are domain events: a player placing a mark at a coordinate. The
//! engine records them as history and can rebuild a game from them.

use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: impl Into<Coord>) -> Self {
        Self {
            player,
            coord: coord.into(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}
