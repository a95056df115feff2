//! Tic Tac Toe - CLI entry point

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tictactoe::{Cli, Command, parse_moves, run_script, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game, log_file } => {
            init_file_logging(&log_file)?;
            let settings = game.settings()?;
            info!(size = settings.size(), players = ?settings.players(), "Launching TUI");
            run_tui(&settings)
        }
        Command::Script { game, moves, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let settings = game.settings()?;
            let moves = parse_moves(&moves)?;
            let mut stdout = std::io::stdout().lock();
            let snapshot = run_script(&settings, &moves, &mut stdout)?;
            if json {
                let rendered =
                    serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?;
                writeln!(stdout, "{}", rendered)?;
            }
            Ok(())
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
