//! Random-playout simulation.

use strictly_cube::{Coord, GameEngine, GameError, MoveOutcome, Player};
use tracing::{debug, info, instrument};

/// Tally of a batch of random games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Edge length of the cube.
    pub size: usize,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Moves played over all games.
    pub total_moves: u64,
}

impl SimulationReport {
    /// Average game length in moves.
    pub fn average_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / f64::from(self.games)
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} random games on a {n}x{n}x{n} board", self.games, n = self.size)?;
        writeln!(f, "  X wins: {}", self.x_wins)?;
        writeln!(f, "  O wins: {}", self.o_wins)?;
        writeln!(f, "  draws:  {}", self.draws)?;
        write!(f, "  average length: {:.1} moves", self.average_length())
    }
}

/// Plays `games` uniformly random games and tallies the results.
///
/// The same seed always produces the same report.
#[instrument]
pub fn simulate(
    size: usize,
    first_player: Player,
    games: u32,
    seed: u64,
) -> Result<SimulationReport, GameError> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut engine = GameEngine::with_starting_player(size, first_player)?;
    let mut total_moves = 0u64;

    for game in 0..games {
        let outcome = play_random_game(&mut engine, &mut rng)?;
        debug!(game, moves = engine.moves_played(), ?outcome, "Random game finished");
        total_moves += engine.moves_played() as u64;
        engine.reset();
    }

    let scores = engine.scoreboard();
    let report = SimulationReport {
        size,
        games,
        x_wins: scores.wins(Player::X),
        o_wins: scores.wins(Player::O),
        draws: scores.draws(),
        total_moves,
    };
    info!(x_wins = report.x_wins, o_wins = report.o_wins, draws = report.draws, "Simulation complete");
    Ok(report)
}

fn play_random_game(
    engine: &mut GameEngine,
    rng: &mut fastrand::Rng,
) -> Result<MoveOutcome, GameError> {
    loop {
        let empty: Vec<Coord> = engine.board().empty_cells().collect();
        let coord = empty[rng.usize(..empty.len())];
        match engine.apply_move(coord)? {
            MoveOutcome::Continue(_) => continue,
            finished => return Ok(finished),
        }
    }
}
