//! Terminal front end for strictly_cube.
//!
//! Everything here sits outside the core engine: configuration, text
//! rendering, line-based input, the interactive loop and random-playout
//! simulation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
mod play;
mod render;
mod simulate;

pub use config::{ConfigError, GameConfig};
pub use input::{parse_input, Input, InputError};
pub use play::run_play;
pub use render::{render_board, render_catalog_summary};
pub use simulate::{simulate, SimulationReport};
