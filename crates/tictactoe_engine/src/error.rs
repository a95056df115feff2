//! Error types for the game engine.

use crate::types::{Board, Coord, PlayerList};

/// Invalid game configuration passed to `start`, or a reset with nothing
/// to reset.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Board size below one or above [`Board::MAX_SIZE`].
    #[display("Board size must be between 1 and {}, got {}", Board::MAX_SIZE, _0)]
    InvalidSize(usize),

    /// A stored board whose cell count does not match its size.
    #[display("A {}x{} board needs {} cells, got {}", size, size, size * size, cells)]
    CellCount {
        /// Declared dimension.
        size: usize,
        /// Cells actually present.
        cells: usize,
    },

    /// Not enough player labels.
    #[display("At least {} players are required, got {}", PlayerList::MIN_PLAYERS, _0)]
    TooFewPlayers(usize),

    /// `reset` called before any successful `start`.
    #[display("Game has never been started")]
    NeverStarted,
}

impl std::error::Error for ConfigError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Cell {} is outside the {}x{} board", coord, size, size)]
    OutOfBounds {
        /// Requested cell.
        coord: Coord,
        /// Board dimension.
        size: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// No game has been started yet.
    #[display("Game has not been started")]
    NotStarted,

    /// The game already ended in a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Display surface a [`GameSession`](crate::GameSession) cannot run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Collaborator {
    /// Surface that shows status messages.
    #[strum(to_string = "status display")]
    StatusDisplay,
    /// Surface that shows board cells.
    #[strum(to_string = "board display")]
    BoardDisplay,
}

/// Fatal session setup error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A required display surface was never provided.
    #[display("Please set the {} before starting a game", _0)]
    MissingCollaborator(Collaborator),
}

impl std::error::Error for SessionError {}
