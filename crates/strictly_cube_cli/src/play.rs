//! Interactive play over a line-based terminal.

use crate::input::{parse_input, Input};
use crate::render::render_board;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_cube::{GameEngine, MoveOutcome};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Enter a move as `x y z` (or `x,y,z`), each between 0 and N-1.
Commands: r = reset, s = scores, h = help, q = quit";

/// Runs the interactive loop until `quit` or end of input.
///
/// Engine errors (occupied cell, out of range, game over) are reported
/// and the player is asked again.
#[instrument(skip_all, fields(size = engine.size()))]
pub fn run_play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
) -> Result<()> {
    info!("Starting interactive game");
    writeln!(output, "{HELP}\n")?;
    write!(output, "{}", render_board(&engine.current_state()))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match parse_input(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                prompt(&mut output)?;
                continue;
            }
        };
        debug!(?command, "Parsed input");

        match command {
            Input::Quit => break,
            Input::Help => writeln!(output, "{HELP}")?,
            Input::Scores => writeln!(output, "{}", engine.scoreboard())?,
            Input::Reset => {
                engine.reset();
                write!(output, "{}", render_board(&engine.current_state()))?;
            }
            Input::Move(coord) => match engine.apply_move(coord) {
                Ok(outcome) => {
                    write!(output, "{}", render_board(&engine.current_state()))?;
                    if !matches!(outcome, MoveOutcome::Continue(_)) {
                        writeln!(output, "{}", engine.scoreboard())?;
                        writeln!(output, "Press 'r' to reset the game")?;
                    }
                }
                Err(e) => writeln!(output, "{e}")?,
            },
        }
        prompt(&mut output)?;
    }

    info!(games = engine.scoreboard().games(), "Interactive game finished");
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush().context("Failed to flush output")
}
