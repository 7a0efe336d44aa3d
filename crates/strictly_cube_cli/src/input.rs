//! Line-based input parsing for the interactive front end.

use derive_more::Display;
use strictly_cube::Coord;

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at a coordinate.
    Move(Coord),
    /// Start a new game.
    Reset,
    /// Show the scoreboard.
    Scores,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// A coordinate needs exactly three components.
    #[display("Expected three coordinates, got {}", _0)]
    WrongArity(usize),
    /// A component is not a non-negative integer.
    #[display("Not a coordinate: {}", _0)]
    NotANumber(String),
}

impl std::error::Error for InputError {}

/// Parses `x y z`, `x,y,z`, `(x, y, z)` or a command word.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "r" | "reset" => return Ok(Input::Reset),
        "s" | "scores" => return Ok(Input::Scores),
        "h" | "help" | "?" => return Ok(Input::Help),
        "q" | "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(InputError::WrongArity(parts.len()));
    }

    let mut values = [0usize; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse()
            .map_err(|_| InputError::NotANumber((*part).to_string()))?;
    }
    Ok(Input::Move(Coord::new(values[0], values[1], values[2])))
}
