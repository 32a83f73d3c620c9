//! The stateful game session and its observer channel.
//!
//! - `GameEngine`: owns the current state, validates moves, runs the
//!   computer's reply and publishes every transition
//! - `StateChannel`: latest-value channel with synchronous subscribers

pub mod observer;
pub mod session;

pub use observer::{StateChannel, Subscription};
pub use session::GameEngine;
