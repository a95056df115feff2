//! Contract-based move validation.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use crate::engine::TicTacToe;
use crate::error::MoveError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::phases::Phase;
use crate::types::{Cell, Coord};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game accepts moves.
pub struct GameActive;

impl GameActive {
    /// Rejects moves outside `InProgress`.
    #[instrument(skip(game))]
    pub fn check(game: &TicTacToe) -> Result<(), MoveError> {
        match game.phase() {
            Phase::InProgress => Ok(()),
            Phase::NotStarted => Err(MoveError::NotStarted),
            Phase::Won { .. } | Phase::Draw => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates off the board.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &TicTacToe) -> Result<(), MoveError> {
        if game.board().contains(*coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                coord: *coord,
                size: game.size(),
            })
        }
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects marked cells.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &TicTacToe) -> Result<(), MoveError> {
        if game.board().is_empty(*coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(*coord))
        }
    }
}

/// Composite precondition: the game is active, the cell is on the board and empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &TicTacToe) -> Result<(), MoveError> {
        GameActive::check(game)?;
        InBounds::check(coord, game)?;
        CellIsEmpty::check(coord, game)?;
        Ok(())
    }
}

/// Contract for moves.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions:
/// - exactly one cell went from empty to the mover's mark, nothing else changed
/// - every [`EngineInvariants`] member holds
pub struct MoveContract;

impl MoveContract {
    fn single_new_mark(before: &TicTacToe, after: &TicTacToe) -> bool {
        if before.board().size() != after.board().size() {
            return false;
        }
        let mover = before.current_player();
        let mut changed = 0;
        for (old, new) in before.board().cells().iter().zip(after.board().cells()) {
            if old == new {
                continue;
            }
            if *old != Cell::Empty || *new != Cell::Occupied(mover) {
                return false;
            }
            changed += 1;
        }
        changed == 1
    }
}

impl Contract<TicTacToe, Coord> for MoveContract {
    fn pre(game: &TicTacToe, coord: &Coord) -> Result<(), MoveError> {
        LegalMove::check(coord, game)
    }

    fn post(before: &TicTacToe, after: &TicTacToe) -> Result<(), MoveError> {
        if !Self::single_new_mark(before, after) {
            warn!("Move changed more than one cell");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move marks exactly one empty cell".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
