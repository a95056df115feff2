//! Game phases, winning lines and move outcomes.

use crate::types::{Coord, PlayerList};
use serde::{Deserialize, Serialize};

/// A line of `size` cells that wins the game when one player fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Horizontal line.
    #[display("row {}", _0)]
    Row(usize),
    /// Vertical line.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Returns true if `coord` lies on this line of a `size × size` board.
    pub fn contains(self, coord: Coord, size: usize) -> bool {
        if coord.row >= size || coord.col >= size {
            return false;
        }
        match self {
            Line::Row(row) => coord.row == row,
            Line::Column(col) => coord.col == col,
            Line::Diagonal => coord.row == coord.col,
            Line::AntiDiagonal => coord.row + coord.col + 1 == size,
        }
    }

    /// Coordinates along this line, in row order.
    pub fn cells(self, size: usize) -> Vec<Coord> {
        (0..size)
            .map(|i| match self {
                Line::Row(row) => Coord::new(row, i),
                Line::Column(col) => Coord::new(i, col),
                Line::Diagonal => Coord::new(i, i),
                Line::AntiDiagonal => Coord::new(i, size - i - 1),
            })
            .collect()
    }
}

/// Lifecycle phase of a game.
///
/// `InProgress` is the only phase that accepts moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display, strum::EnumIs,
)]
pub enum Phase {
    /// No game has been started.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// A player completed a line.
    Won {
        /// Index of the winning player.
        player: usize,
        /// The completed line.
        line: Line,
    },
    /// The board filled up with no completed line.
    Draw,
}

impl Phase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won { .. } | Phase::Draw)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<usize> {
        match self {
            Phase::Won { player, .. } => Some(player),
            _ => None,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mover completed `line`.
    Win {
        /// Index of the winning player.
        player: usize,
        /// The completed line.
        line: Line,
    },
    /// The board is full and nobody won.
    Draw,
    /// The game goes on with `next_player`.
    Continue {
        /// Index of the player to move next.
        next_player: usize,
    },
}

impl MoveOutcome {
    /// Returns true if the game ended with this move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// Status line shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StatusMessage {
    /// A player is up next.
    #[display("It's {}'s turn.", _0)]
    Turn(String),
    /// A player won.
    #[display("Player {} has won!!", _0)]
    Won(String),
    /// Nobody won.
    #[display("Game ended in a draw.")]
    Draw,
}

impl StatusMessage {
    /// Maps a move outcome to its status message.
    pub fn for_outcome(outcome: &MoveOutcome, players: &PlayerList) -> Self {
        match outcome {
            MoveOutcome::Win { player, .. } => Self::Won(players.label(*player).to_string()),
            MoveOutcome::Draw => Self::Draw,
            MoveOutcome::Continue { next_player } => {
                Self::Turn(players.label(*next_player).to_string())
            }
        }
    }

    /// Turn message for the player at `index`.
    pub fn turn(players: &PlayerList, index: usize) -> Self {
        Self::Turn(players.label(index).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wording() {
        let players = PlayerList::default();
        let win = MoveOutcome::Win {
            player: 0,
            line: Line::Row(0),
        };
        assert_eq!(
            StatusMessage::for_outcome(&win, &players).to_string(),
            "Player O has won!!"
        );
        assert_eq!(
            StatusMessage::for_outcome(&MoveOutcome::Draw, &players).to_string(),
            "Game ended in a draw."
        );
        assert_eq!(
            StatusMessage::for_outcome(&MoveOutcome::Continue { next_player: 1 }, &players)
                .to_string(),
            "It's X's turn."
        );
    }

    #[test]
    fn test_anti_diagonal_cells() {
        assert_eq!(
            Line::AntiDiagonal.cells(3),
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
        assert!(Line::AntiDiagonal.contains(Coord::new(2, 0), 3));
        assert!(!Line::AntiDiagonal.contains(Coord::new(0, 0), 3));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!Phase::NotStarted.is_terminal());
        assert!(!Phase::InProgress.is_terminal());
        assert!(Phase::Draw.is_terminal());
        let won = Phase::Won {
            player: 1,
            line: Line::Diagonal,
        };
        assert!(won.is_terminal());
        assert_eq!(won.winner(), Some(1));
        assert!(won.is_won());
    }
}
