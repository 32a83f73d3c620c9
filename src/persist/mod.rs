//! Session records for an external preference store.
//!
//! The engine does not persist anything itself. A host that wants sessions
//! to survive restarts captures a `SavedSession`, stores it however it
//! likes (bytes via `to_bytes`, or any serde format) and hands it back to
//! `GameEngine::restore`.

pub mod record;

pub use record::SavedSession;
