//! Board cells and player marks.
//!
//! ## Cell
//!
//! What a single board square holds: nothing, an X or an O.
//!
//! ## Player
//!
//! The two sides of a game. Each side maps to exactly one non-empty `Cell`.

use serde::{Deserialize, Serialize};

/// Contents of a single board square.
///
/// Ordinals (`Empty = 0`, `X = 1`, `O = 2`) are the encoding used by
/// stored sessions and remote room documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied square.
    #[default]
    Empty,
    /// Square holding an X.
    X,
    /// Square holding an O.
    O,
}

impl Cell {
    /// Get the ordinal encoding of this cell.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => 2,
        }
    }

    /// Decode a cell from its ordinal. Returns `None` for unknown values.
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::X),
            2 => Some(Cell::O),
            _ => None,
        }
    }

    /// Check if the square is unoccupied.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the player owning this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Single-character symbol for text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// One side of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Plays X marks.
    X,
    /// Plays O marks.
    O,
}

impl Player {
    /// Both players, X first.
    pub const BOTH: [Player; 2] = [Player::X, Player::O];

    /// Get the cell this player writes onto the board.
    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Get the other player.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}
