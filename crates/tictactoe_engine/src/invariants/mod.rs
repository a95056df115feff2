//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are checked after every move in debug builds and can be tested
//! on their own.

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
/// Implemented for tuples of three invariants, the shape of
/// [`EngineInvariants`].
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod terminal_phase;
pub mod turn_matches_board;
pub mod turn_order;

pub use terminal_phase::TerminalPhaseInvariant;
pub use turn_matches_board::TurnMatchesBoardInvariant;
pub use turn_order::TurnOrderInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    TurnOrderInvariant,
    TurnMatchesBoardInvariant,
    TerminalPhaseInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TicTacToe;
    use crate::types::{Cell, Coord};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&TicTacToe::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = TicTacToe::new();
        game.start(3, ["A", "B", "C"]).unwrap();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1)] {
            game.make_move(row, col).unwrap();
        }
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = TicTacToe::new();
        game.start(3, ["O", "X"]).unwrap();
        game.make_move(1, 1).unwrap();

        // X gets two marks while O has one
        game.board.set(Coord::new(0, 0), Cell::Occupied(1)).unwrap();
        game.board.set(Coord::new(0, 1), Cell::Occupied(1)).unwrap();

        let violations = EngineInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }
}
