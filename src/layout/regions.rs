//! Display regions the game session writes into.

use tictactoe_engine::{BoardDisplay, Coord, Line, StatusDisplay};
use tracing::debug;

/// The status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    text: String,
}

impl StatusRegion {
    /// Current status text; empty before the first game.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusDisplay for StatusRegion {
    fn show_status(&mut self, message: &str) {
        debug!(message, "Status updated");
        self.text = message.to_string();
    }
}

/// The board container: one label slot per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardRegion {
    size: usize,
    cells: Vec<Option<String>>,
    winning_line: Option<Line>,
}

impl BoardRegion {
    /// Board dimension; zero before the first game.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Label shown at `coord`, if any.
    pub fn label(&self, coord: Coord) -> Option<&str> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.cells[coord.row * self.size + coord.col].as_deref()
    }

    /// Line highlighted after a win.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// True if `coord` is part of the highlighted line.
    pub fn is_highlighted(&self, coord: Coord) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(coord, self.size))
    }
}

impl BoardDisplay for BoardRegion {
    fn reset_board(&mut self, size: usize) {
        self.size = size;
        self.cells = vec![None; size * size];
        self.winning_line = None;
    }

    fn mark_cell(&mut self, coord: Coord, label: &str) {
        if coord.row < self.size && coord.col < self.size {
            self.cells[coord.row * self.size + coord.col] = Some(label.to_string());
        }
    }

    fn highlight_line(&mut self, line: Line) {
        self.winning_line = Some(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_region_marks_and_resets() {
        let mut region = BoardRegion::default();
        region.reset_board(3);
        region.mark_cell(Coord::new(1, 2), "X");
        assert_eq!(region.label(Coord::new(1, 2)), Some("X"));
        assert_eq!(region.label(Coord::new(0, 0)), None);

        region.highlight_line(Line::Column(2));
        assert!(region.is_highlighted(Coord::new(0, 2)));

        region.reset_board(4);
        assert_eq!(region.size(), 4);
        assert_eq!(region.label(Coord::new(1, 2)), None);
        assert_eq!(region.winning_line(), None);
    }

    #[test]
    fn test_out_of_range_mark_ignored() {
        let mut region = BoardRegion::default();
        region.reset_board(2);
        region.mark_cell(Coord::new(5, 5), "O");
        assert_eq!(region.label(Coord::new(5, 5)), None);
    }
}
