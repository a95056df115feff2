//! Turn order invariant: marks follow the player list in order.

use super::Invariant;
use crate::TicTacToe;

/// Invariant: players move in list order, wrapping around.
///
/// Earlier players never hold fewer marks than later ones, and the first
/// player leads the last by at most one mark.
pub struct TurnOrderInvariant;

impl Invariant<TicTacToe> for TurnOrderInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let counts: Vec<usize> = (0..game.players().len())
            .map(|p| game.board().count_of(p))
            .collect();

        let ordered = counts.windows(2).all(|pair| pair[0] >= pair[1]);

        ordered
            && match (counts.first(), counts.last()) {
                (Some(first), Some(last)) => first - last <= 1,
                _ => true,
            }
    }

    fn description() -> &'static str {
        "Players mark cells in list order"
    }
}
