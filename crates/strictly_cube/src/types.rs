//! Core domain types for cubic tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A coordinate `(x, y, z)` inside the cube.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Layer.
    pub z: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Steps `times` along `direction`, returning `None` when a component
    /// would go negative or overflow.
    pub fn offset(self, direction: [i8; 3], times: isize) -> Option<Self> {
        let step = |value: usize, delta: i8| {
            let moved = isize::try_from(value)
                .ok()?
                .checked_add(isize::from(delta).checked_mul(times)?)?;
            usize::try_from(moved).ok()
        };
        Some(Self {
            x: step(self.x, direction[0])?,
            y: step(self.y, direction[1])?,
            z: step(self.z, direction[2])?,
        })
    }
}

impl From<(usize, usize, usize)> for Coord {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn test_player_parses_case_insensitive() {
        assert_eq!(Player::from_str("x").unwrap(), Player::X);
        assert_eq!(Player::from_str("O").unwrap(), Player::O);
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_offset_stops_below_zero() {
        let origin = Coord::new(0, 1, 2);
        assert_eq!(origin.offset([1, 1, -1], 2), Some(Coord::new(2, 3, 0)));
        assert_eq!(origin.offset([1, 0, 0], -1), None);
    }

    #[test]
    fn test_offset_does_not_wrap() {
        assert_eq!(Coord::new(usize::MAX, 0, 0).offset([1, 0, 0], 1), None);
        assert_eq!(Coord::new(0, 0, 1).offset([0, 0, 1], isize::MAX), None);
        assert_eq!(Coord::new(0, 0, 0).offset([0, -1, 0], isize::MIN), None);
        assert_eq!(
            Coord::new(0, 0, 0).offset([0, 0, 1], isize::MAX),
            Some(Coord::new(0, 0, isize::MAX as usize))
        );
    }
}
