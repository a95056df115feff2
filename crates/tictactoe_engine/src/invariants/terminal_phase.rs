//! The phase agrees with what is on the board.

use super::Invariant;
use crate::TicTacToe;
use crate::phases::{Line, Phase};
use crate::rules::{
    anti_diagonal_complete, column_complete, diagonal_complete, is_full, row_complete, winner,
};

/// Invariant: terminal phases are backed by the board.
///
/// `Won` requires the winner to own the recorded line, `Draw` requires a
/// full board with no owned line, and `InProgress` requires neither.
pub struct TerminalPhaseInvariant;

impl Invariant<TicTacToe> for TerminalPhaseInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let board = game.board();
        match game.phase() {
            Phase::NotStarted => true,
            Phase::InProgress => winner(board).is_none() && !is_full(board),
            Phase::Won { player, line } => match line {
                Line::Row(row) => row_complete(board, row, player),
                Line::Column(col) => column_complete(board, col, player),
                Line::Diagonal => diagonal_complete(board, player),
                Line::AntiDiagonal => anti_diagonal_complete(board, player),
            },
            Phase::Draw => is_full(board) && winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game phase agrees with the board"
    }
}
