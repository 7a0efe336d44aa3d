//! Game rules for cubic tic-tac-toe.
//!
//! Pure functions over a board and its line catalog. Rules are kept apart
//! from board storage so the engine and the tests can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line_through};
