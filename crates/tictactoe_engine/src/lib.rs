//! Pure tic-tac-toe game logic.
//!
//! The engine plays on an N×N board with two or more players taking turns
//! in list order. A player wins by filling a whole row, column or diagonal;
//! a full board without such a line is a draw.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{MoveOutcome, TicTacToe};
//!
//! let mut game = TicTacToe::new();
//! game.start(3, ["O", "X"])?;
//!
//! let outcome = game.make_move(1, 1)?;
//! assert_eq!(outcome, MoveOutcome::Continue { next_player: 1 });
//! assert_eq!(game.status_message(&outcome).to_string(), "It's X's turn.");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod phases;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use engine::{Snapshot, TicTacToe};
pub use error::{Collaborator, ConfigError, MoveError, SessionError};
pub use phases::{Line, MoveOutcome, Phase, StatusMessage};
pub use session::{BoardDisplay, GameSession, GameSessionBuilder, StatusDisplay};
pub use types::{Board, Cell, Coord, PlayerList};
