//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from board
//! storage so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{
    anti_diagonal_complete, column_complete, completed_line, diagonal_complete, row_complete,
    winner,
};
