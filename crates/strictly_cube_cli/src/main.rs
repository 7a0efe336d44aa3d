//! Strictly Cube - terminal front end
//!
//! Plays N×N×N tic-tac-toe, runs random-playout simulations and reports
//! line-catalog statistics.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_cube::GameEngine;
use strictly_cube_cli::{render_catalog_summary, run_play, simulate, GameConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = match &cli.command {
        Command::Simulate { seed, .. } => *seed,
        _ => None,
    };
    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(cli.size, cli.first, seed)?;
    info!(size = config.size(), first_player = %config.first_player(), "Configuration ready");

    match cli.command {
        Command::Play => {
            let mut engine = GameEngine::with_starting_player(*config.size(), *config.first_player())
                .context("Failed to create game")?;
            let stdin = std::io::stdin();
            run_play(&mut engine, stdin.lock(), std::io::stdout())
        }
        Command::Simulate { games, .. } => {
            let seed = config.seed().unwrap_or_else(|| fastrand::u64(..));
            info!(seed, "Running simulation");
            let report = simulate(*config.size(), *config.first_player(), games, seed)
                .context("Simulation failed")?;
            println!("{report}");
            Ok(())
        }
        Command::Lines => {
            let summary = render_catalog_summary(*config.size()).context("Failed to build catalog")?;
            print!("{summary}");
            Ok(())
        }
    }
}
