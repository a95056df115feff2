//! Win detection for boards of any size.

use crate::phases::Line;
use crate::types::{Board, Cell, Coord};
use tracing::instrument;

fn line_owned_by(board: &Board, line: Line, player: usize) -> bool {
    line.cells(board.size())
        .into_iter()
        .all(|coord| board.get(coord) == Some(Cell::Occupied(player)))
}

/// Every cell of `row` belongs to `player`.
pub fn row_complete(board: &Board, row: usize, player: usize) -> bool {
    row < board.size() && line_owned_by(board, Line::Row(row), player)
}

/// Every cell of `col` belongs to `player`.
pub fn column_complete(board: &Board, col: usize, player: usize) -> bool {
    col < board.size() && line_owned_by(board, Line::Column(col), player)
}

/// Every cell of the main diagonal belongs to `player`.
pub fn diagonal_complete(board: &Board, player: usize) -> bool {
    line_owned_by(board, Line::Diagonal, player)
}

/// Every cell of the anti-diagonal belongs to `player`.
pub fn anti_diagonal_complete(board: &Board, player: usize) -> bool {
    line_owned_by(board, Line::AntiDiagonal, player)
}

/// Returns the line `player` completed by marking `coord`, if any.
///
/// Checks the row, then the column, then the main diagonal (only when
/// `coord` is on it), then the anti-diagonal (only when `coord` is on it).
#[instrument(skip(board))]
pub fn completed_line(board: &Board, coord: Coord, player: usize) -> Option<Line> {
    let size = board.size();
    if row_complete(board, coord.row, player) {
        Some(Line::Row(coord.row))
    } else if column_complete(board, coord.col, player) {
        Some(Line::Column(coord.col))
    } else if coord.row == coord.col && diagonal_complete(board, player) {
        Some(Line::Diagonal)
    } else if coord.row + coord.col + 1 == size && anti_diagonal_complete(board, player) {
        Some(Line::AntiDiagonal)
    } else {
        None
    }
}

/// Scans every line and returns the first one a single player owns.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<(usize, Line)> {
    let size = board.size();
    let lines = (0..size)
        .map(Line::Row)
        .chain((0..size).map(Line::Column))
        .chain([Line::Diagonal, Line::AntiDiagonal]);

    for line in lines {
        if let Some(&first) = line.cells(size).first()
            && let Some(Cell::Occupied(player)) = board.get(first)
            && line_owned_by(board, line, player)
        {
            return Some((player, line));
        }
    }

    None
}
