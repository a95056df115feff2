//! Core domain types for tic-tac-toe.

use crate::error::{ConfigError, MoveError};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by the player at this index in the player list.
    Occupied(usize),
}

impl Cell {
    /// Returns true if nobody has marked this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the index of the player occupying this cell.
    pub fn occupant(self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Zero-based board coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

/// Square board of `size × size` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Default board dimension.
    pub const DEFAULT_SIZE: usize = 3;

    /// Largest board dimension.
    pub const MAX_SIZE: usize = 1024;

    /// Checks that `size` is a usable board dimension without allocating.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] unless `1 <= size <= MAX_SIZE`.
    pub fn check_size(size: usize) -> Result<(), ConfigError> {
        if (1..=Self::MAX_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(ConfigError::InvalidSize(size))
        }
    }

    /// Creates an empty `size × size` board.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if `size` is zero or above
    /// [`Board::MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Self::check_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Returns the board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then_some(coord.row * self.size + coord.col)
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), MoveError> {
        let size = self.size;
        let i = self
            .index(coord)
            .ok_or(MoveError::OutOfBounds { coord, size })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if the cell at `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of cells nobody has marked yet.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of cells marked by `player`.
    pub fn count_of(&self, player: usize) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid, empty cells shown as `.`.
    pub fn display(&self, players: &PlayerList) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => ".",
                        Cell::Occupied(p) => players.label(*p),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::check_size(raw.size)?;
        if raw.cells.len() != raw.size * raw.size {
            return Err(ConfigError::CellCount {
                size: raw.size,
                cells: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            cells: vec![Cell::Empty; Self::DEFAULT_SIZE * Self::DEFAULT_SIZE],
        }
    }
}

/// Ordered player labels. Turn order follows list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PlayerList {
    labels: Vec<String>,
}

impl PlayerList {
    /// Fewest players a game can have.
    pub const MIN_PLAYERS: usize = 2;

    /// Creates a player list from labels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewPlayers`] for fewer than two labels.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() < Self::MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(labels.len()));
        }
        Ok(Self { labels })
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; a list holds at least two players.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of the player at `index`. Indices wrap around the list.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index % self.labels.len()]
    }

    /// Index of the player who moves after `index`.
    pub fn next_after(&self, index: usize) -> usize {
        (index + 1) % self.labels.len()
    }

    /// All labels in turn order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterates over labels in turn order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.labels.iter()
    }
}

impl Default for PlayerList {
    fn default() -> Self {
        Self {
            labels: vec!["O".to_string(), "X".to_string()],
        }
    }
}

impl TryFrom<Vec<String>> for PlayerList {
    type Error = ConfigError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<PlayerList> for Vec<String> {
    fn from(players: PlayerList) -> Self {
        players.labels
    }
}

impl IntoIterator for PlayerList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlayerList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(ConfigError::InvalidSize(0)));
    }

    #[test]
    fn test_oversized_board_rejected_without_allocating() {
        assert_eq!(
            Board::new(1 << 31),
            Err(ConfigError::InvalidSize(1 << 31))
        );
        assert_eq!(
            Board::new(Board::MAX_SIZE + 1),
            Err(ConfigError::InvalidSize(Board::MAX_SIZE + 1))
        );
        assert!(Board::check_size(Board::MAX_SIZE).is_ok());
    }

    #[test]
    fn test_board_deserialize_validates_shape() {
        assert!(serde_json::from_str::<Board>(r#"{"size":3,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).is_err());

        let board = Board::new(2).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
        assert_eq!(back.get(Coord::new(1, 1)), Some(Cell::Empty));
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.get(Coord::new(3, 0)), None);
        assert_eq!(board.get(Coord::new(0, 3)), None);
        assert!(!board.is_empty(Coord::new(5, 5)));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(2).unwrap();
        let result = board.set(Coord::new(2, 1), Cell::Occupied(0));
        assert!(matches!(result, Err(MoveError::OutOfBounds { size: 2, .. })));
        assert_eq!(board.empty_count(), 4);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(2).unwrap();
        board.set(Coord::new(0, 0), Cell::Occupied(0)).unwrap();
        board.set(Coord::new(1, 1), Cell::Occupied(1)).unwrap();
        assert_eq!(board.display(&PlayerList::default()), "O|.\n.|X");
    }

    #[test]
    fn test_single_player_rejected() {
        assert_eq!(PlayerList::new(["O"]), Err(ConfigError::TooFewPlayers(1)));
    }

    #[test]
    fn test_next_after_wraps() {
        let players = PlayerList::new(["A", "B", "C"]).unwrap();
        assert_eq!(players.next_after(0), 1);
        assert_eq!(players.next_after(2), 0);
    }

    #[test]
    fn test_player_list_deserialize_validates() {
        let ok: PlayerList = serde_json::from_str(r#"["A","B"]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(serde_json::from_str::<PlayerList>(r#"["A"]"#).is_err());
    }
}
