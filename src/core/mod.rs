//! Core engine types: cells, players, board, state, RNG, configuration.
//!
//! Everything here is plain data. Transitions live in `rules`, the
//! computer's decisions in `policy`, and the stateful session in `engine`.

pub mod cell;
pub mod board;
pub mod rng;
pub mod config;
pub mod state;

pub use cell::{Cell, Player};
pub use board::{Board, EmptyCells, BOARD_SIZE, CENTER, CORNERS, EDGES, WINNING_COMBINATIONS};
pub use rng::{GameRng, RandomSource};
pub use config::{Difficulty, EngineConfig, FirstPlayer};
pub use state::{winning_line_from, GameState, GameStatus, MoveRecord, Scoreboard, WinningLine};
