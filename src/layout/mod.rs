//! Page layout: title, counter input, start/reset button, status line and
//! board, plus the game session they drive.
//!
//! The layout holds no game rules. It turns user actions into session calls
//! and exposes what the regions hold for rendering.

mod cursor;
mod elements;
mod regions;

pub use cursor::Direction;
pub use elements::{CLASS_PREFIX, Element, ElementKind, ElementRole, element_list};
pub use regions::{BoardRegion, StatusRegion};

use crate::settings::GameSettings;
use derive_more::{Display, Error, From};
use tictactoe_engine::{
    Coord, GameSession, GameSessionBuilder, MoveOutcome, PlayerList, SessionError, TicTacToe,
};
use tracing::{debug, info, instrument, warn};

/// Largest board the counter input accepts.
pub const MAX_BOARD_SIZE: usize = 9;

/// Label of the start button once a game has been started.
pub const RESET_LABEL: &str = "Reset";

/// Layout setup error.
#[derive(Debug, Clone, Display, Error, From)]
pub enum LayoutError {
    /// The session could not be wired to its displays.
    #[display("Layout setup failed: {}", _0)]
    Session(SessionError),
}

/// The counter input: text being typed and the size it last applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    text: String,
    value: usize,
}

impl Counter {
    fn new(value: usize) -> Self {
        Self {
            text: String::new(),
            value,
        }
    }

    /// Text currently in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Board size used by the next start.
    pub fn value(&self) -> usize {
        self.value
    }

    /// Parses the typed text into a size, keeping the old one if it is unusable.
    fn apply(&mut self) -> usize {
        if self.text.is_empty() {
            return self.value;
        }
        match self.text.parse::<usize>() {
            Ok(n) if (1..=MAX_BOARD_SIZE).contains(&n) => {
                self.value = n;
            }
            _ => {
                warn!(text = %self.text, value = self.value, "Ignoring counter input");
                self.text.clear();
            }
        }
        self.value
    }
}

/// The page: static elements, the counter, the start button and the session.
#[derive(Debug)]
pub struct Layout {
    elements: Vec<Element>,
    counter: Counter,
    players: PlayerList,
    game_started: bool,
    button_label: &'static str,
    cursor: Coord,
    session: GameSession<StatusRegion, BoardRegion>,
}

impl Layout {
    /// Builds the layout from settings. No game is running yet.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the settings are invalid or the session
    /// cannot be wired.
    #[instrument(skip(settings), fields(size = settings.size(), players = ?settings.players()))]
    pub fn new(settings: &GameSettings) -> Result<Self, LayoutError> {
        let session = GameSessionBuilder::new()
            .status(StatusRegion::default())
            .board(BoardRegion::default())
            .build()?;

        let players = match settings.player_list() {
            Ok(players) => players,
            Err(e) => {
                warn!(error = %e, "Falling back to default players");
                PlayerList::default()
            }
        };

        let elements = element_list();
        let button_label = elements
            .iter()
            .find(|e| e.role == ElementRole::Start)
            .and_then(|e| e.text)
            .unwrap_or_default();

        Ok(Self {
            elements,
            counter: Counter::new((*settings.size()).clamp(1, MAX_BOARD_SIZE)),
            players,
            game_started: false,
            button_label,
            cursor: Coord::default(),
            session,
        })
    }

    /// Handles a press of the start/reset button.
    ///
    /// Toggles the started flag: turning it on starts a game with the
    /// counter's size, turning it off resets the current game. Either way
    /// the button reads "Reset" afterwards.
    #[instrument(skip(self))]
    pub fn on_start_clicked(&mut self) {
        self.game_started = !self.game_started;

        let result = if self.game_started {
            let size = self.counter.apply();
            info!(size, "Starting game from layout");
            self.session.start(size, &self.players)
        } else {
            info!("Resetting game from layout");
            self.session.reset()
        };

        if let Err(e) = result {
            warn!(error = %e, "Start request rejected");
        }

        self.cursor = cursor::clamp(self.cursor, self.session.engine().size());
        self.button_label = RESET_LABEL;
    }

    /// Forwards a click on `coord` to the session.
    #[instrument(skip(self))]
    pub fn on_cell_clicked(&mut self, coord: Coord) -> Option<MoveOutcome> {
        let outcome = self.session.click(coord.row, coord.col);
        debug!(?outcome, "Cell clicked");
        outcome
    }

    /// Clicks the cell under the cursor.
    pub fn click_cursor(&mut self) -> Option<MoveOutcome> {
        self.on_cell_clicked(self.cursor)
    }

    /// Moves the board cursor.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = cursor::step(self.cursor, direction, self.session.engine().size());
    }

    /// Types a character into the counter input. Only digits are accepted.
    pub fn counter_input(&mut self, ch: char) {
        if ch.is_ascii_digit() && self.counter.text.len() < 2 {
            self.counter.text.push(ch);
        }
    }

    /// Deletes the last character of the counter input.
    pub fn counter_backspace(&mut self) {
        self.counter.text.pop();
    }

    /// Static elements in display order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The counter input.
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Current label of the start button.
    pub fn button_label(&self) -> &str {
        self.button_label
    }

    /// Whether the start toggle is on.
    pub fn is_started(&self) -> bool {
        self.game_started
    }

    /// Board cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Text of the status region.
    pub fn status_text(&self) -> &str {
        self.session.status_display().text()
    }

    /// The board region.
    pub fn board(&self) -> &BoardRegion {
        self.session.board_display()
    }

    /// The engine behind the session.
    pub fn engine(&self) -> &TicTacToe {
        self.session.engine()
    }
}
