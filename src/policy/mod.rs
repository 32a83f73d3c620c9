//! Computer-move policies.
//!
//! Policies are trait-based so the engine can be driven by something other
//! than the built-in tiers:
//! - `ComputerPolicy`: pick a square for a side on a given board
//! - `TieredPolicy`: the Easy / Harder / Expert strategy

pub mod tiered;

pub use tiered::{find_winning_move, positional_move, random_move, ComputerPolicy, TieredPolicy};
