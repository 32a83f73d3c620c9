//! The tiered computer opponent.
//!
//! Steps, run in order until one yields a square:
//!
//! 1. **Win**: a square that completes a line for the computer
//! 2. **Block**: a square that would complete a line for the opponent
//! 3. **Position**: center, else a random corner, else a random edge
//! 4. **Random**: any empty square
//!
//! `Easy` runs only step 4, `Harder` runs 1, 2 and 4, `Expert` runs all.
//! Win and block scans go in ascending square order, so ties resolve to
//! the lowest index.

use tracing::debug;

use crate::core::{Board, Difficulty, Player, RandomSource, CENTER, CORNERS, EDGES};
use crate::rules::check_winner;

/// Chooses the computer's square.
pub trait ComputerPolicy {
    /// Pick a square for `mark` on `board`.
    ///
    /// Returns `None` only when the board has no empty square; callers check
    /// for a finished round first.
    fn choose_move(&self, board: &Board, mark: Player, rng: &mut dyn RandomSource) -> Option<usize>;
}

/// Difficulty-tiered policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TieredPolicy {
    difficulty: Difficulty,
}

impl TieredPolicy {
    /// Create a policy for one tier.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// The tier this policy plays at.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl ComputerPolicy for TieredPolicy {
    fn choose_move(&self, board: &Board, mark: Player, rng: &mut dyn RandomSource) -> Option<usize> {
        if board.is_full() {
            return None;
        }

        if self.difficulty != Difficulty::Easy {
            if let Some(pos) = find_winning_move(board, mark) {
                debug!(pos, %mark, "taking winning square");
                return Some(pos);
            }
            if let Some(pos) = find_winning_move(board, mark.opposite()) {
                debug!(pos, %mark, "blocking opponent");
                return Some(pos);
            }
        }

        if self.difficulty == Difficulty::Expert {
            if let Some(pos) = positional_move(board, rng) {
                debug!(pos, %mark, "positional square");
                return Some(pos);
            }
        }

        random_move(board, rng)
    }
}

/// First empty square (ascending) where `player` would complete a line.
#[must_use]
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    let cell = player.to_cell();
    board.empty_cells().into_iter().find(|&pos| {
        board
            .place(pos, cell)
            .is_some_and(|trial| check_winner(&trial, cell).is_some())
    })
}

/// Center if free, else a random free corner, else a random free edge.
pub fn positional_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }
    let free = |squares: &[usize]| -> Vec<usize> {
        squares.iter().copied().filter(|&i| board.is_empty_at(i)).collect()
    };
    rng.choose(&free(&CORNERS))
        .or_else(|| rng.choose(&free(&EDGES)))
}

/// Uniformly random empty square.
pub fn random_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    rng.choose(&board.empty_cells())
}
