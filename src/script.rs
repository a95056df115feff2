//! Headless play: run a move list and print every status line.

use crate::layout::{BoardRegion, StatusRegion};
use crate::settings::GameSettings;
use derive_more::{Display, Error};
use std::io::Write;
use tictactoe_engine::{Coord, GameSessionBuilder, Snapshot};
use tracing::{debug, info, instrument};

/// A move list entry that is not `row,col`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {:?}: expected row,col", token)]
pub struct ParseMoveError {
    /// The offending token.
    pub token: String,
}

/// Parses a whitespace-separated list of `row,col` pairs.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<Coord>, ParseMoveError> {
    input
        .split_whitespace()
        .map(|token| -> Result<Coord, ParseMoveError> {
            let invalid = || ParseMoveError {
                token: token.to_string(),
            };
            let (row, col) = token.split_once(',').ok_or_else(invalid)?;
            let row = row.trim().parse().map_err(|_| invalid())?;
            let col = col.trim().parse().map_err(|_| invalid())?;
            Ok(Coord::new(row, col))
        })
        .collect()
}

/// Plays `moves` on a fresh game and writes each status line to `out`,
/// followed by the final board.
///
/// Rejected moves are skipped without output, as a click on a taken cell
/// does nothing on screen.
#[instrument(skip(settings, out), fields(size = settings.size()))]
pub fn run_script<W: Write>(
    settings: &GameSettings,
    moves: &[Coord],
    out: &mut W,
) -> anyhow::Result<Snapshot> {
    let mut session = GameSessionBuilder::new()
        .status(StatusRegion::default())
        .board(BoardRegion::default())
        .build()?;

    session.start(*settings.size(), settings.player_list()?)?;
    writeln!(out, "{}", session.status_display().text())?;

    for coord in moves {
        match session.click(coord.row, coord.col) {
            Some(outcome) => {
                debug!(%coord, ?outcome, "Scripted move accepted");
                writeln!(out, "{}", session.status_display().text())?;
            }
            None => debug!(%coord, "Scripted move ignored"),
        }
    }

    let engine = session.engine();
    writeln!(out, "{}", engine.board().display(engine.players()))?;
    info!(phase = %engine.phase(), "Script finished");
    Ok(engine.snapshot())
}
