//! The current player index agrees with the number of marks.

use super::Invariant;
use crate::TicTacToe;
use crate::phases::Phase;

/// Invariant: the current player is determined by how many cells are marked.
///
/// While a game is in progress the player to move is `filled % players`.
/// Once it ends, the current player is the one who made the final move.
pub struct TurnMatchesBoardInvariant;

impl Invariant<TicTacToe> for TurnMatchesBoardInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let board = game.board();
        let filled = board.cells().len() - board.empty_count();
        let players = game.players().len();
        let current = game.current_player();

        match game.phase() {
            Phase::NotStarted => current == 0,
            Phase::InProgress => current == filled % players,
            Phase::Won { player, .. } => {
                filled > 0 && player == current && current == (filled - 1) % players
            }
            Phase::Draw => filled > 0 && current == (filled - 1) % players,
        }
    }

    fn description() -> &'static str {
        "Current player matches the number of marks on the board"
    }
}
