//! Error types.
//!
//! Engine operations never surface these to their caller: a rejected move
//! is a silent no-op. They exist for the pure rule functions and for
//! decoding records that come from outside the engine.

use thiserror::Error;

use crate::core::Player;

/// Why a move was rejected. Checked in this order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position {0} is off the board")]
    OutOfRange(usize),

    #[error("the round is already over")]
    GameOver,

    #[error("square {0} is already occupied")]
    Occupied(usize),
}

/// A stored winning line that cannot be on a 3x3 board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidLine {
    #[error("winning line has {0} indices, expected 0 or 3")]
    Length(usize),

    #[error("winning line index {0} is off the board")]
    Index(usize),
}

/// A stored outcome that contradicts the board it was stored with.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOutcome {
    #[error("both X and O have a completed line")]
    BothWon,

    #[error("recorded winner {recorded:?} but the board shows {on_board:?}")]
    WinnerMismatch {
        recorded: Option<Player>,
        on_board: Option<Player>,
    },

    #[error("winner {0} recorded on a round still in progress")]
    UnfinishedWin(Player),

    #[error("winner {0} does not own the stored winning line")]
    LineNotOwned(Player),

    #[error("winning line stored without a winner")]
    LineWithoutWinner,

    #[error("round over without a winner on a board that is not full")]
    OverWithoutResult,
}

/// A saved session that cannot seed an engine.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("board has {0} cells, expected 9")]
    BoardLength(usize),

    #[error(transparent)]
    Line(#[from] InvalidLine),

    #[error(transparent)]
    Outcome(#[from] InvalidOutcome),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// A remote room document that does not describe a valid game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("board has {0} cells, expected 9")]
    BoardLength(usize),

    #[error("unknown cell value {0}")]
    UnknownCell(u8),

    #[error("{0} is not seated in this room")]
    UnknownParticipant(String),

    #[error(transparent)]
    Line(#[from] InvalidLine),

    #[error(transparent)]
    Outcome(#[from] InvalidOutcome),
}
