//! Saved-session record.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{winning_line_from, Board, Cell, Difficulty, GameState, Player, Scoreboard};
use crate::error::RecordError;
use crate::rules::verify_outcome;

/// Flat snapshot of a session as a preference store keeps it.
///
/// Move history is not kept; a restored round starts with an empty
/// history even when marks are already on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    /// Squares in row-major order. Must hold exactly 9.
    pub board: Vec<Cell>,
    /// Player to move.
    pub current_player: Player,
    /// Winner of the round, if any.
    pub winner: Option<Player>,
    /// Round finished (won or drawn).
    pub is_game_over: bool,
    /// The completed line: 3 indices when won, empty otherwise.
    pub winning_combination: Vec<usize>,
    /// No mark placed yet this round.
    pub first_move: bool,
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
    /// Difficulty ordinal (see `Difficulty::ordinal`).
    pub difficulty: u8,
}

impl SavedSession {
    /// Capture a state and the active difficulty.
    #[must_use]
    pub fn capture(state: &GameState, difficulty: Difficulty) -> Self {
        Self {
            board: state.board.cells().to_vec(),
            current_player: state.current_player,
            winner: state.winner,
            is_game_over: state.is_game_over,
            winning_combination: state.winning_combination.to_vec(),
            first_move: state.first_move,
            victories: state.scores.victories,
            defeats: state.scores.defeats,
            ties: state.scores.ties,
            x_wins: state.scores.x_wins,
            o_wins: state.scores.o_wins,
            difficulty: difficulty.ordinal(),
        }
    }

    /// Stored difficulty. Unknown ordinals read as `Expert`.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_ordinal(self.difficulty)
    }

    /// Rebuild the game state, checking the record is internally consistent.
    ///
    /// The stored outcome must agree with the board (see
    /// `rules::verify_outcome`): a completed line needs a matching winner,
    /// a stored line needs a winner, and a round can only end without a
    /// winner on a full board.
    pub fn to_state(&self) -> Result<GameState, RecordError> {
        let board =
            Board::from_slice(&self.board).ok_or(RecordError::BoardLength(self.board.len()))?;

        let state = GameState {
            board,
            current_player: self.current_player,
            winner: self.winner,
            is_game_over: self.is_game_over || self.winner.is_some(),
            winning_combination: winning_line_from(&self.winning_combination)?,
            scores: Scoreboard {
                victories: self.victories,
                defeats: self.defeats,
                ties: self.ties,
                x_wins: self.x_wins,
                o_wins: self.o_wins,
            },
            first_move: self.first_move,
            history: Vector::new(),
        };
        verify_outcome(&state)?;
        Ok(state)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Default for SavedSession {
    fn default() -> Self {
        Self::capture(&GameState::new(Player::X), Difficulty::default())
    }
}
