//! # ttt-engine
//!
//! A tic-tac-toe game engine with a tiered computer opponent.
//!
//! ## Design Principles
//!
//! 1. **One Engine, Many Variants**: Fixed or random opener, computer or
//!    hotseat, difficulty tiers on or off, all through `EngineConfig`.
//!
//! 2. **States Are Values**: Every move produces a new `GameState`; nothing
//!    outside the engine mutates the current one.
//!
//! 3. **Injected Randomness**: All random choices go through a
//!    `RandomSource`, so games replay exactly under a fixed seed.
//!
//! ## Architecture
//!
//! - **Pure rules**: `rules::apply_move` validates, places the mark, detects
//!   win/draw and updates the score. Illegal moves are reported as
//!   `InvalidMove` and ignored by the engine.
//!
//! - **Push-based session**: `GameEngine` publishes each new state to its
//!   subscribers. A human move that hands the turn to the computer is
//!   answered inside the same call.
//!
//! ## Modules
//!
//! - `core`: Cells, players, board, state, RNG, configuration
//! - `rules`: Win/draw detection and the move transition
//! - `policy`: The computer-move policy (Easy / Harder / Expert)
//! - `engine`: The stateful session and its observer channel
//! - `persist`: Saved-session records for an external store
//! - `online`: Two-player rooms and their remote document shape

pub mod core;
pub mod error;
pub mod rules;
pub mod policy;
pub mod engine;
pub mod persist;
pub mod online;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Player,
    GameRng, RandomSource,
    Difficulty, EngineConfig, FirstPlayer,
    GameState, GameStatus, MoveRecord, Scoreboard, WinningLine,
    WINNING_COMBINATIONS,
};

pub use crate::error::{DocumentError, InvalidLine, InvalidMove, InvalidOutcome, RecordError};

pub use crate::rules::{apply_move, check_winner, is_draw, validate_move, verify_outcome, Scoring};

pub use crate::policy::{find_winning_move, ComputerPolicy, TieredPolicy};

pub use crate::engine::{GameEngine, StateChannel, Subscription};

pub use crate::persist::SavedSession;

pub use crate::online::{GameDocument, GameRoom, RoomExit};
