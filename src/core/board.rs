//! The 3x3 board.
//!
//! Squares are indexed 0-8 in row-major order (`index = row * 3 + col`):
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! A `Board` is a value. Placing a mark produces a new board and leaves the
//! original untouched, which is what both the transition rules and the
//! computer policy's look-ahead rely on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::cell::Cell;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Index of the center square.
pub const CENTER: usize = 4;

/// Indices of the corner squares.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Indices of the edge squares.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// All winning lines in declaration order: rows, then columns, then diagonals.
///
/// Win detection walks this list in order and reports the first match.
pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Empty-square indices, ascending. Never more than 9 so it stays inline.
pub type EmptyCells = SmallVec<[usize; BOARD_SIZE]>;

/// A 3x3 tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Create a board from explicit cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a board from a slice. Returns `None` unless it has exactly 9 cells.
    #[must_use]
    pub fn from_slice(cells: &[Cell]) -> Option<Self> {
        let cells: [Cell; BOARD_SIZE] = cells.try_into().ok()?;
        Some(Self { cells })
    }

    /// Get the cell at a position. Returns `None` when out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Check if a position is on the board and unoccupied.
    #[must_use]
    pub fn is_empty_at(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// Return a copy of this board with `cell` written at `position`.
    ///
    /// Returns `None` when the position is out of range.
    #[must_use]
    pub fn place(&self, position: usize, cell: Cell) -> Option<Self> {
        let mut next = *self;
        *next.cells.get_mut(position)? = cell;
        Some(next)
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Indices of unoccupied squares in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> EmptyCells {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Count squares holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check if no square is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c.is_empty())
    }

    /// Ordinal encoding of every square (see `Cell::ordinal`).
    #[must_use]
    pub fn ordinals(&self) -> [u8; BOARD_SIZE] {
        self.cells.map(Cell::ordinal)
    }

    /// Render the board as three text rows, e.g. `"X.O\n.X.\n..O"`.
    #[must_use]
    pub fn display(&self) -> String {
        self.cells
            .chunks(3)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<[Cell; BOARD_SIZE]> for Board {
    fn from(cells: [Cell; BOARD_SIZE]) -> Self {
        Self::from_cells(cells)
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, position: usize) -> &Self::Output {
        &self.cells[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Cell::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!board.is_full());
        assert_eq!(board.count(E), 9);
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(4, X).unwrap();

        assert_eq!(board[4], E);
        assert_eq!(next[4], X);
        assert_eq!(next.count(X), 1);
        assert!(board.place(9, X).is_none());
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board = Board::from_cells([X, E, O, E, X, E, O, E, E]);
        assert_eq!(board.empty_cells().as_slice(), &[1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_from_slice_requires_nine_cells() {
        assert!(Board::from_slice(&[E; 8]).is_none());
        assert!(Board::from_slice(&[E; 10]).is_none());
        assert_eq!(Board::from_slice(&[E; 9]), Some(Board::new()));
    }

    #[test]
    fn test_display_and_ordinals() {
        let board = Board::from_cells([X, E, O, E, X, E, E, E, O]);
        assert_eq!(board.display(), "X.O\n.X.\n..O");
        assert_eq!(board.ordinals(), [1, 0, 2, 0, 1, 0, 0, 0, 2]);
    }

    #[test]
    fn test_winning_combinations_cover_every_square() {
        for square in 0..BOARD_SIZE {
            assert!(WINNING_COMBINATIONS.iter().any(|line| line.contains(&square)));
        }
        assert!(!CORNERS.contains(&CENTER));
        assert!(!EDGES.contains(&CENTER));
    }
}
