//! The game-state engine.

use crate::contracts::{Contract, MoveContract};
use crate::error::{ConfigError, MoveError};
use crate::phases::{MoveOutcome, Phase, StatusMessage};
use crate::rules;
use crate::types::{Board, Cell, Coord, PlayerList};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine for an N×N board and any number of players.
///
/// The engine owns the board, the current player and the game phase. It
/// never touches a display; see [`GameSession`](crate::GameSession) for the
/// wiring to presentation surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicTacToe {
    pub(crate) board: Board,
    pub(crate) players: PlayerList,
    pub(crate) current: usize,
    pub(crate) phase: Phase,
}

impl TicTacToe {
    /// Creates an engine with no game started.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game on an empty `size × size` board.
    ///
    /// The first player in `players` moves first. On error the previous game
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if `size` is zero or above
    /// [`Board::MAX_SIZE`] and
    /// [`ConfigError::TooFewPlayers`] for fewer than two players.
    #[instrument(skip(self, players))]
    pub fn start<I, S>(&mut self, size: usize, players: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let board = Board::new(size)?;
        let players = PlayerList::new(players)?;

        info!(size, players = players.len(), "Starting game");
        self.board = board;
        self.players = players;
        self.current = 0;
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Restarts with the size and players of the last successful `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NeverStarted`] if no game was ever started.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        if self.phase.is_not_started() {
            return Err(ConfigError::NeverStarted);
        }
        let size = self.board.size();
        let players = self.players.clone();
        self.start(size, players)
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// After the mark is written the row, column, main diagonal and
    /// anti-diagonal through the cell are checked, in that order. A completed
    /// line wins; otherwise a full board is a draw; otherwise the turn passes
    /// to the next player in list order.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the game unchanged:
    /// - [`MoveError::NotStarted`] / [`MoveError::GameOver`] outside `InProgress`
    /// - [`MoveError::OutOfBounds`] for coordinates off the board
    /// - [`MoveError::CellOccupied`] for a marked cell
    /// - [`MoveError::InvariantViolation`] in debug builds when the move
    ///   breaks an engine invariant; the move is rolled back
    #[instrument(skip(self), fields(player = self.current))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let coord = Coord::new(row, col);
        MoveContract::pre(self, &coord)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current;
        self.board.set(coord, Cell::Occupied(player))?;

        let outcome = if let Some(line) = rules::completed_line(&self.board, coord, player) {
            self.phase = Phase::Won { player, line };
            MoveOutcome::Win { player, line }
        } else if rules::is_full(&self.board) {
            self.phase = Phase::Draw;
            MoveOutcome::Draw
        } else {
            self.current = self.players.next_after(player);
            MoveOutcome::Continue {
                next_player: self.current,
            }
        };
        debug!(%coord, ?outcome, "Move applied");

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(outcome)
    }

    /// Maps a move outcome to the message shown to players.
    pub fn status_message(&self, outcome: &MoveOutcome) -> StatusMessage {
        StatusMessage::for_outcome(outcome, &self.players)
    }

    /// Message describing the current phase, if a game was started.
    pub fn current_status(&self) -> Option<StatusMessage> {
        match self.phase {
            Phase::NotStarted => None,
            Phase::InProgress => Some(StatusMessage::turn(&self.players, self.current)),
            Phase::Won { player, .. } => {
                Some(StatusMessage::Won(self.players.label(player).to_string()))
            }
            Phase::Draw => Some(StatusMessage::Draw),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.phase.is_in_progress()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &PlayerList {
        &self.players
    }

    /// Index of the player to move (or who made the final move).
    pub fn current_player(&self) -> usize {
        self.current
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Label of the player occupying (`row`, `col`).
    pub fn label_at(&self, row: usize, col: usize) -> Option<&str> {
        self.board
            .get(Coord::new(row, col))
            .and_then(Cell::occupant)
            .map(|p| self.players.label(p))
    }

    /// Serializable view of the game for presentation layers.
    pub fn snapshot(&self) -> Snapshot {
        let size = self.board.size();
        let cells: Vec<Vec<Option<String>>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.label_at(row, col).map(str::to_string))
                    .collect::<Vec<_>>()
            })
            .collect();
        Snapshot {
            size,
            cells,
            current_player: self.players.label(self.current).to_string(),
            phase: self.phase,
            status: self.current_status().map(|m| m.to_string()),
        }
    }
}

/// Point-in-time view of a game with player indices resolved to labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board dimension.
    pub size: usize,
    /// Cell labels by row; `None` for empty cells.
    pub cells: Vec<Vec<Option<String>>>,
    /// Label of the player to move (or who made the final move).
    pub current_player: String,
    /// Game phase.
    pub phase: Phase,
    /// Status line, absent before the first start.
    pub status: Option<String>,
}
