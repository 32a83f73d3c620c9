//! Game state: the aggregate the engine replaces on every transition.
//!
//! ## GameState
//!
//! - Board, player to move
//! - Winner, game-over flag and the completed line
//! - Running score (persists across rounds)
//! - Move history for the current round
//!
//! ## Invariants
//!
//! - `winner.is_some()` implies `is_game_over` and a 3-index
//!   `winning_combination` whose squares all hold the winner's mark.
//! - `is_game_over` without a winner means a full board and an empty
//!   `winning_combination`.
//!
//! States are values. Transitions build a new state (`rules::apply_move`)
//! and the history uses `im` so that clone stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, BOARD_SIZE};
use super::cell::Player;
use crate::error::InvalidLine;

/// A completed line: empty while nobody has won, otherwise 3 indices.
pub type WinningLine = SmallVec<[usize; 3]>;

/// Validate a stored winning line (0 or 3 in-range indices).
pub fn winning_line_from(indices: &[usize]) -> Result<WinningLine, InvalidLine> {
    if !matches!(indices.len(), 0 | 3) {
        return Err(InvalidLine::Length(indices.len()));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i >= BOARD_SIZE) {
        return Err(InvalidLine::Index(bad));
    }
    Ok(SmallVec::from_slice(indices))
}

/// Running tally of finished rounds.
///
/// `victories`/`defeats` are relative to the local human. `x_wins`/`o_wins`
/// count by mark and stay meaningful when both sides are human.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by the local human.
    pub victories: u32,
    /// Rounds won by the other side.
    pub defeats: u32,
    /// Drawn rounds.
    pub ties: u32,
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
}

impl Scoreboard {
    /// Record a won round.
    pub fn record_win(&mut self, winner: Player, winner_is_local_human: bool) {
        if winner_is_local_human {
            self.victories += 1;
        } else {
            self.defeats += 1;
        }
        match winner {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    /// Record a drawn round.
    pub fn record_tie(&mut self) {
        self.ties += 1;
    }

    /// Wins credited to a mark.
    #[must_use]
    pub fn wins_for(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Number of finished rounds.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.victories + self.defeats + self.ties
    }
}

/// One placed mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Square index (0-8).
    pub position: usize,
    /// Who placed it.
    pub player: Player,
}

/// Where a round stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for this player's move.
    InProgress(Player),
    /// Finished with a completed line.
    Won {
        /// The winning side.
        player: Player,
        /// The completed line.
        combination: WinningLine,
    },
    /// Finished on a full board with no line.
    Draw,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub board: Board,

    /// Player to move. Left at the last mover once the round is over.
    pub current_player: Player,

    /// Winner of the round, if any.
    pub winner: Option<Player>,

    /// Round finished (won or drawn).
    pub is_game_over: bool,

    /// The completed line when won, empty otherwise.
    pub winning_combination: WinningLine,

    /// Running tally across rounds.
    pub scores: Scoreboard,

    /// No mark placed yet this round.
    pub first_move: bool,

    /// Marks placed this round, in order.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Fresh round with zeroed scores.
    #[must_use]
    pub fn new(first: Player) -> Self {
        Self::with_scores(first, Scoreboard::default())
    }

    /// Fresh round carrying a score forward.
    #[must_use]
    pub fn with_scores(first: Player, scores: Scoreboard) -> Self {
        Self {
            board: Board::new(),
            current_player: first,
            winner: None,
            is_game_over: false,
            winning_combination: WinningLine::new(),
            scores,
            first_move: true,
            history: Vector::new(),
        }
    }

    /// Next round: empty board, same scores.
    #[must_use]
    pub fn next_round(&self, first: Player) -> Self {
        Self::with_scores(first, self.scores)
    }

    /// Check if the round is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_game_over
    }

    /// Derive the round status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won {
                player,
                combination: self.winning_combination.clone(),
            },
            None if self.is_game_over => GameStatus::Draw,
            None => GameStatus::InProgress(self.current_player),
        }
    }

    /// Most recent mark this round.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }
}
