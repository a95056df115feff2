//! Terminal front end for the layout.

mod input;
mod ui;

pub use input::{Action, action_for, apply};

use crate::layout::Layout;
use crate::settings::GameSettings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &GameSettings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut layout = Layout::new(settings).context("Failed to build layout")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut layout);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, layout: &mut Layout) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, layout))?;

        if let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
            && !apply(layout, action)
        {
            info!("User quit");
            return Ok(());
        }
    }
}
