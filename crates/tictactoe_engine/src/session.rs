//! Wiring between the engine and the surfaces that display it.
//!
//! The engine never reaches for a rendering surface. A [`GameSession`]
//! receives display handles at construction and pushes every state change
//! into them; presentation code only translates user input into
//! [`GameSession::click`] and draws whatever the displays hold.

use crate::engine::TicTacToe;
use crate::error::{Collaborator, ConfigError, SessionError};
use crate::phases::{Line, MoveOutcome};
use crate::types::Coord;
use tracing::{debug, instrument};

/// Surface that shows the status line.
pub trait StatusDisplay {
    /// Replaces the status line.
    fn show_status(&mut self, message: &str);
}

/// Surface that shows the board.
pub trait BoardDisplay {
    /// Clears the display to an empty `size × size` grid.
    fn reset_board(&mut self, size: usize);

    /// Shows `label` in the cell at `coord`.
    fn mark_cell(&mut self, coord: Coord, label: &str);

    /// Called when `line` wins the game.
    fn highlight_line(&mut self, _line: Line) {}
}

/// Builder for [`GameSession`].
#[derive(Debug)]
pub struct GameSessionBuilder<S, B> {
    status: Option<S>,
    board: Option<B>,
}

impl<S, B> Default for GameSessionBuilder<S, B> {
    fn default() -> Self {
        Self {
            status: None,
            board: None,
        }
    }
}

impl<S: StatusDisplay, B: BoardDisplay> GameSessionBuilder<S, B> {
    /// Creates a builder with no displays attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the status display.
    pub fn status(mut self, status: S) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the board display.
    pub fn board(mut self, board: B) -> Self {
        self.board = Some(board);
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingCollaborator`] if either display is missing.
    #[instrument(skip(self))]
    pub fn build(self) -> Result<GameSession<S, B>, SessionError> {
        let status = self
            .status
            .ok_or(SessionError::MissingCollaborator(Collaborator::StatusDisplay))?;
        let board = self
            .board
            .ok_or(SessionError::MissingCollaborator(Collaborator::BoardDisplay))?;
        Ok(GameSession {
            engine: TicTacToe::new(),
            status,
            board,
        })
    }
}

/// A [`TicTacToe`] engine bound to its displays.
#[derive(Debug)]
pub struct GameSession<S, B> {
    engine: TicTacToe,
    status: S,
    board: B,
}

impl<S: StatusDisplay, B: BoardDisplay> GameSession<S, B> {
    /// Starts a new game and shows the first player's turn.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`ConfigError`]; displays are left untouched.
    #[instrument(skip(self, players))]
    pub fn start<I, T>(&mut self, size: usize, players: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.engine.start(size, players)?;
        self.refresh_after_start();
        Ok(())
    }

    /// Restarts with the last size and players.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NeverStarted`] before the first start.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.engine.reset()?;
        self.refresh_after_start();
        Ok(())
    }

    fn refresh_after_start(&mut self) {
        self.board.reset_board(self.engine.size());
        if let Some(message) = self.engine.current_status() {
            self.status.show_status(&message.to_string());
        }
    }

    /// Forwards a click on (`row`, `col`) to the engine.
    ///
    /// Accepted moves mark the cell and update the status line. Rejected
    /// moves are ignored and return `None`.
    #[instrument(skip(self))]
    pub fn click(&mut self, row: usize, col: usize) -> Option<MoveOutcome> {
        let mover = self.engine.current_player();
        match self.engine.make_move(row, col) {
            Ok(outcome) => {
                let label = self.engine.players().label(mover).to_string();
                self.board.mark_cell(Coord::new(row, col), &label);
                if let MoveOutcome::Win { line, .. } = outcome {
                    self.board.highlight_line(line);
                }
                let message = self.engine.status_message(&outcome);
                self.status.show_status(&message.to_string());
                Some(outcome)
            }
            Err(e) => {
                debug!(error = %e, "Ignoring rejected move");
                None
            }
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &TicTacToe {
        &self.engine
    }

    /// Returns the status display.
    pub fn status_display(&self) -> &S {
        &self.status
    }

    /// Returns the board display.
    pub fn board_display(&self) -> &B {
        &self.board
    }
}
