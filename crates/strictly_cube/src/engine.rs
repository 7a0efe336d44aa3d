//! Game engine for cubic tic-tac-toe.
//!
//! The engine owns one board, one turn/phase state and a shared line
//! catalog. Each accepted move only inspects the lines through its own
//! cell; the full-board rescan in [`crate::rules::check_winner`] is kept as
//! an oracle for tests.

use crate::action::Move;
use crate::board::Board;
use crate::error::GameError;
#[cfg(debug_assertions)]
use crate::invariants::assert_invariants;
use crate::lines::{Line, WinLineCatalog};
use crate::rules::winning_line_through;
use crate::score::Scoreboard;
use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Phase of a game.
///
/// `Won` and `Draw` are terminal: only [`GameEngine::reset`] leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The first completed line in catalog order.
        line: Line,
    },
    /// Board filled without a completed line.
    Draw,
}

impl Phase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; the given player moves next.
    Continue(Player),
    /// The mover completed `line`.
    Won {
        /// The player who just moved.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The move filled the board without completing a line.
    Draw,
}

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Copy of the board.
    pub board: Board,
    /// Player to move (the winner, once won).
    pub current_player: Player,
    /// Current phase.
    pub phase: Phase,
    /// Moves accepted since the last reset.
    pub moves_played: usize,
}

/// Cubic tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    catalog: Arc<WinLineCatalog>,
    board: Board,
    starting_player: Player,
    current_player: Player,
    phase: Phase,
    history: Vec<Move>,
    scores: Scoreboard,
}

impl GameEngine {
    /// Creates a new N×N×N game with X moving first.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` for unsupported sizes.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_starting_player(size, Player::X)
    }

    /// Creates a new game where `starting_player` moves first.
    #[instrument]
    pub fn with_starting_player(size: usize, starting_player: Player) -> Result<Self, GameError> {
        let catalog = Arc::new(WinLineCatalog::new(size)?);
        Ok(Self::with_catalog(catalog, starting_player))
    }

    /// Creates a new game on an existing catalog.
    ///
    /// The catalog depends only on the board size, so engines of the same
    /// size can share one.
    #[instrument(skip(catalog), fields(size = catalog.size()))]
    pub fn with_catalog(catalog: Arc<WinLineCatalog>, starting_player: Player) -> Self {
        info!("Creating new cubic tic-tac-toe game");
        Self {
            board: Board::new(catalog.size()),
            catalog,
            starting_player,
            current_player: starting_player,
            phase: Phase::InProgress,
            history: Vec::new(),
            scores: Scoreboard::default(),
        }
    }

    /// Rebuilds a game from a move list.
    ///
    /// The first move decides who started; every later move must belong to
    /// the player on turn.
    ///
    /// # Errors
    ///
    /// `WrongPlayer` for an out-of-turn move, plus anything
    /// [`apply_move`](Self::apply_move) can return.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: usize, moves: &[Move]) -> Result<Self, GameError> {
        let first = moves.first().map_or(Player::X, |m| m.player);
        let mut engine = Self::with_starting_player(size, first)?;
        for mov in moves {
            if engine.phase.is_over() {
                return Err(GameError::GameAlreadyOver);
            }
            if mov.player != engine.current_player {
                warn!(%mov, expected = %engine.current_player, "Replayed move out of turn");
                return Err(GameError::WrongPlayer(mov.player));
            }
            engine.apply_move(mov.coord)?;
        }
        Ok(engine)
    }

    /// Places the current player's mark at `coord`.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` once the game is won or drawn
    /// - `InvalidMove` for coordinates outside the cube
    /// - `CellOccupied` if the cell already holds a mark
    ///
    /// Nothing is mutated on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<MoveOutcome, GameError> {
        if self.phase.is_over() {
            warn!("Move rejected: game is already over");
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.current_player;
        if let Err(e) = self.board.set(coord, player) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }
        self.history.push(Move::new(player, coord));

        let outcome = if let Some(line) = winning_line_through(&self.board, &self.catalog, coord, player) {
            info!(winner = %player, moves = self.history.len(), "Game won");
            let line = line.clone();
            self.scores.record_win(player);
            self.phase = Phase::Won {
                winner: player,
                line: line.clone(),
            };
            MoveOutcome::Won { player, line }
        } else if self.board.is_full() {
            info!(moves = self.history.len(), "Game drawn");
            self.scores.record_draw();
            self.phase = Phase::Draw;
            MoveOutcome::Draw
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Turn passes");
            MoveOutcome::Continue(self.current_player)
        };

        #[cfg(debug_assertions)]
        assert_invariants(self);

        Ok(outcome)
    }

    /// Clears the board and history and hands the first move back to the
    /// starting player. The catalog and the scoreboard are kept.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board.reset();
        self.history.clear();
        self.current_player = self.starting_player;
        self.phase = Phase::InProgress;
    }

    /// Snapshot of board, turn and phase.
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            phase: self.phase.clone(),
            moves_played: self.history.len(),
        }
    }

    /// Edge length of the cube.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The shared line catalog.
    pub fn catalog(&self) -> &Arc<WinLineCatalog> {
        &self.catalog
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Player who moves first after every reset.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves accepted since the last reset.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Results of every finished game on this engine.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, coords: &[(usize, usize, usize)]) -> MoveOutcome {
        let mut last = None;
        for c in coords {
            last = Some(engine.apply_move((*c).into()).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_new_game_starts_in_progress() {
        let engine = GameEngine::new(3).unwrap();
        let state = engine.current_state();
        assert_eq!(state.phase, Phase::InProgress);
        assert_eq!(state.current_player, Player::X);
        assert_eq!(state.moves_played, 0);
        assert_eq!(engine.catalog().len(), 49);
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        assert_eq!(GameEngine::new(2).unwrap_err(), GameError::InvalidBoardSize(2));
        assert_eq!(GameEngine::new(1).unwrap_err(), GameError::InvalidBoardSize(1));
    }

    #[test]
    fn test_turn_alternates() {
        let mut engine = GameEngine::new(3).unwrap();
        assert_eq!(
            engine.apply_move(Coord::new(0, 0, 0)),
            Ok(MoveOutcome::Continue(Player::O))
        );
        assert_eq!(
            engine.apply_move(Coord::new(1, 0, 0)),
            Ok(MoveOutcome::Continue(Player::X))
        );
        assert_eq!(engine.history()[1], Move::new(Player::O, (1, 0, 0)));
    }

    #[test]
    fn test_out_of_range_move_is_invalid() {
        let mut engine = GameEngine::new(3).unwrap();
        let coord = Coord::new(0, 3, 0);
        assert_eq!(engine.apply_move(coord), Err(GameError::InvalidMove(coord)));
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.moves_played(), 0);
    }

    #[test]
    fn test_win_does_not_advance_turn() {
        let mut engine = GameEngine::new(3).unwrap();
        let outcome = play(
            &mut engine,
            &[(0, 0, 0), (0, 1, 0), (1, 0, 0), (0, 2, 0), (2, 0, 0)],
        );
        assert!(matches!(outcome, MoveOutcome::Won { player: Player::X, .. }));
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.phase().winner(), Some(Player::X));
        assert_eq!(engine.scoreboard().wins(Player::X), 1);
    }

    #[test]
    fn test_reset_keeps_catalog_and_scores() {
        let mut engine = GameEngine::with_starting_player(3, Player::O).unwrap();
        play(
            &mut engine,
            &[(0, 0, 0), (0, 1, 0), (1, 0, 0), (0, 2, 0), (2, 0, 0)],
        );
        let catalog = Arc::clone(engine.catalog());
        engine.reset();

        assert!(Arc::ptr_eq(&catalog, engine.catalog()));
        assert_eq!(engine.phase(), &Phase::InProgress);
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.board().filled(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.scoreboard().wins(Player::O), 1);
    }

    #[test]
    fn test_shared_catalog_engines_are_independent() {
        let catalog = Arc::new(WinLineCatalog::new(3).unwrap());
        let mut first = GameEngine::with_catalog(Arc::clone(&catalog), Player::X);
        let second = GameEngine::with_catalog(catalog, Player::X);
        first.apply_move(Coord::new(1, 1, 1)).unwrap();
        assert_eq!(second.board().filled(), 0);
        assert!(Arc::ptr_eq(first.catalog(), second.catalog()));
    }

    #[test]
    fn test_replay_rejects_out_of_turn_move() {
        let moves = [
            Move::new(Player::X, (0, 0, 0)),
            Move::new(Player::X, (1, 1, 1)),
        ];
        assert_eq!(
            GameEngine::replay(3, &moves).unwrap_err(),
            GameError::WrongPlayer(Player::X)
        );
    }

    #[test]
    fn test_replay_rejects_moves_after_win() {
        let moves = [
            Move::new(Player::X, (0, 0, 0)),
            Move::new(Player::O, (0, 1, 0)),
            Move::new(Player::X, (1, 0, 0)),
            Move::new(Player::O, (0, 2, 0)),
            Move::new(Player::X, (2, 0, 0)),
            Move::new(Player::O, (2, 2, 2)),
        ];
        assert_eq!(
            GameEngine::replay(3, &moves).unwrap_err(),
            GameError::GameAlreadyOver
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.apply_move(Coord::new(2, 1, 0)).unwrap();
        let json = serde_json::to_string(&engine.current_state()).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, engine.current_state());
    }

    #[test]
    fn test_snapshot_with_truncated_board_is_rejected() {
        let engine = GameEngine::new(3).unwrap();
        let mut value = serde_json::to_value(engine.current_state()).unwrap();
        value["board"]["cells"] = serde_json::json!(["Empty"]);
        assert!(serde_json::from_value::<GameSnapshot>(value).is_err());
    }

    #[test]
    fn test_engine_on_deserialized_catalog() {
        assert!(serde_json::from_str::<WinLineCatalog>(r#"{"size":2,"lines":[],"through":[]}"#).is_err());

        let catalog: WinLineCatalog =
            serde_json::from_str(r#"{"size":3,"lines":[],"through":[]}"#).unwrap();
        let mut engine = GameEngine::with_catalog(Arc::new(catalog), Player::X);
        assert_eq!(
            engine.apply_move(Coord::new(0, 0, 0)).unwrap(),
            MoveOutcome::Continue(Player::O)
        );
    }
}
