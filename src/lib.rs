//! Tic Tac Toe - terminal front end
//!
//! The game rules live in the `tictactoe_engine` crate. This crate is the
//! presentation collaborator around them.
//!
//! # Architecture
//!
//! - **Settings**: board size and players from a TOML file and flags
//! - **Layout**: title, counter input, start/reset button, status line and
//!   board, driving a `GameSession`
//! - **TUI**: ratatui rendering and keyboard input for the layout
//! - **Script**: headless play for a fixed move list
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSettings, Layout};
//! use tictactoe_engine::Coord;
//!
//! let mut layout = Layout::new(&GameSettings::default())?;
//! layout.on_start_clicked();
//! layout.on_cell_clicked(Coord::new(1, 1));
//! assert_eq!(layout.status_text(), "It's X's turn.");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod layout;
mod script;
mod settings;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, GameArgs};

// Crate-level exports - Layout
pub use layout::{
    BoardRegion, CLASS_PREFIX, Counter, Direction, Element, ElementKind, ElementRole, Layout,
    LayoutError, MAX_BOARD_SIZE, RESET_LABEL, StatusRegion, element_list,
};

// Crate-level exports - Headless play
pub use script::{ParseMoveError, parse_moves, run_script};

// Crate-level exports - Settings
pub use settings::{GameSettings, SettingsError};

// Crate-level exports - Terminal UI
pub use tui::{Action, action_for, apply, run_tui};
