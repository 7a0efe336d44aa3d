//! Strictly Cube - N×N×N tic-tac-toe game logic
//!
//! Pure game logic with no I/O. A front end maps its own widgets or input
//! to [`Coord`]s and drives a [`GameEngine`].
//!
//! # Architecture
//!
//! - **Board**: N×N×N cell storage with bounds checking
//! - **WinLineCatalog**: every maximal line of N cells, indexed per cell
//! - **Rules**: full-board and move-local win checks, draw detection
//! - **GameEngine**: turn order, phase transitions, history, scores
//! - **Invariants**: properties re-checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_cube::{Coord, GameEngine, MoveOutcome, Player};
//!
//! let mut game = GameEngine::new(3)?;
//! game.apply_move(Coord::new(0, 0, 0))?; // X
//! game.apply_move(Coord::new(0, 1, 0))?; // O
//! game.apply_move(Coord::new(1, 1, 1))?; // X
//! game.apply_move(Coord::new(0, 2, 0))?; // O
//! let outcome = game.apply_move(Coord::new(2, 2, 2))?;
//! assert!(matches!(outcome, MoveOutcome::Won { player: Player::X, .. }));
//! # Ok::<(), strictly_cube::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
pub mod invariants;
mod lines;
pub mod rules;
mod score;
mod types;

/// Smallest supported edge length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported edge length.
pub const MAX_BOARD_SIZE: usize = 16;

pub use action::Move;
pub use board::Board;
pub use engine::{GameEngine, GameSnapshot, MoveOutcome, Phase};
pub use error::GameError;
pub use lines::{Direction, Line, LineFamily, WinLineCatalog};
pub use score::Scoreboard;
pub use types::{Cell, Coord, Player};
