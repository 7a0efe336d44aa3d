//! First-class invariants for cubic tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and the engine checks the full
//! set in debug builds.

use crate::engine::GameEngine;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants; every member is checked and all
/// violations are reported.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod phase_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

/// All engine invariants as a composable set.
pub type CubeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    PhaseConsistentInvariant,
);

/// Checks every engine invariant, logging each violation and panicking in
/// debug builds.
#[instrument(skip(engine), fields(moves = engine.moves_played()))]
pub fn assert_invariants(engine: &GameEngine) {
    let result = CubeInvariants::check_all(engine);
    if let Err(violations) = &result {
        for violation in violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
    }
    debug_assert!(result.is_ok(), "Invariants violated: {:?}", result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new(3).unwrap();
        assert!(CubeInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new(4).unwrap();
        for coord in [(0, 0, 0), (3, 3, 3), (1, 2, 3), (2, 2, 2)] {
            engine.apply_move(coord.into()).unwrap();
        }
        assert!(CubeInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut engine = GameEngine::new(3).unwrap();
        engine.apply_move(Coord::new(1, 1, 1)).unwrap();
        engine.board_mut().set(Coord::new(0, 0, 0), Player::O).unwrap();

        let violations = CubeInvariants::check_all(&engine).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&MonotonicBoardInvariant::description()));
        assert!(descriptions.contains(&HistoryConsistentInvariant::description()));
        assert!(!descriptions.contains(&AlternatingTurnInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new(3).unwrap();
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
