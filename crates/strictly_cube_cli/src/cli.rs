//! Command-line interface for strictly_cube.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_cube::Player;

/// Strictly Cube - N×N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_cube")]
#[command(about = "N×N×N tic-tac-toe with precomputed win lines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Edge length of the cube (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    pub size: Option<usize>,

    /// Player who moves first (overrides the config file)
    #[arg(long, global = true)]
    pub first: Option<Player>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Play random games and report results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Random seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show how many win lines the board has
    Lines,
}
