//! Command-line interface.

use crate::settings::{GameSettings, SettingsError};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe on an N×N board for two or more players
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic Tac Toe on an N×N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// File that receives log output while the UI owns the terminal
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Play a list of moves without a UI and print each status line
    Script {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Moves as space-separated row,col pairs, e.g. "0,0 1,1 0,1"
        #[arg(short, long)]
        moves: String,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Settings file (TOML with `size` and `players`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size, overrides the settings file
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Player labels in turn order, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub players: Option<Vec<String>>,
}

impl GameArgs {
    /// Resolves settings: file (or defaults), then flag overrides.
    pub fn settings(&self) -> Result<GameSettings, SettingsError> {
        GameSettings::load(self.config.as_deref())?
            .with_overrides(self.size, self.players.clone())
    }
}
