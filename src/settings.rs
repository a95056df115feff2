//! Game settings: board size and player labels.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Board, PlayerList};
use tracing::{debug, info, instrument};

/// Board size and players used when a game starts.
///
/// Loaded from an optional TOML file; missing keys fall back to a 3×3
/// board with players `O` and `X`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameSettings {
    /// Board dimension.
    size: usize,

    /// Player labels in turn order.
    players: Vec<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: Board::DEFAULT_SIZE,
            players: PlayerList::default().into(),
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        info!(size = settings.size, players = ?settings.players, "Settings loaded");
        Ok(settings)
    }

    /// Loads from `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of these settings.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        size: Option<usize>,
        players: Option<Vec<String>>,
    ) -> Result<Self, SettingsError> {
        let mut settings = self;
        if let Some(size) = size {
            settings = settings.with_size(size);
        }
        if let Some(players) = players {
            settings = settings.with_players(players);
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the values against the engine's rules without building a board.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SettingsError> {
        Board::check_size(self.size).map_err(|e| SettingsError::new(e.to_string()))?;
        self.player_list()?;
        Ok(())
    }

    /// Player labels as a validated list.
    pub fn player_list(&self) -> Result<PlayerList, SettingsError> {
        PlayerList::new(self.players.iter().cloned()).map_err(|e| SettingsError::new(e.to_string()))
    }
}

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
