//! Game rules: win/draw detection and the move transition.
//!
//! Everything here is a pure function of its inputs. The stateful
//! `GameEngine` and the online `GameRoom` both drive play through
//! `apply_move`, so validation and scoring behave the same everywhere.

pub mod win;
pub mod transition;

pub use transition::{apply_move, validate_move, Scoring};
pub use win::{check_winner, is_draw, verify_outcome, winner_of};
