//! Draw detection.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
