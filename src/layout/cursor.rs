//! Cursor movement over the board.

use tictactoe_engine::Coord;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// Moves `cursor` one cell in `direction`, staying on a `size × size` board.
pub fn step(cursor: Coord, direction: Direction, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    let Coord { row, col } = clamp(cursor, size);
    match direction {
        Direction::Up => Coord::new(row.saturating_sub(1), col),
        Direction::Down => Coord::new((row + 1).min(last), col),
        Direction::Left => Coord::new(row, col.saturating_sub(1)),
        Direction::Right => Coord::new(row, (col + 1).min(last)),
    }
}

/// Pulls `cursor` back onto a `size × size` board.
pub fn clamp(cursor: Coord, size: usize) -> Coord {
    let last = size.saturating_sub(1);
    Coord::new(cursor.row.min(last), cursor.col.min(last))
}
