//! Online two-player rooms.
//!
//! - `GameDocument`: the record a realtime store keeps per room
//! - `GameRoom`: the engine-side room, translated to and from the document
//!
//! Syncing documents with the store is the host application's job.

pub mod document;
pub mod room;

pub use document::GameDocument;
pub use room::{GameRoom, RoomExit};
