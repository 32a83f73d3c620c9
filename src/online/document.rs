//! Remote room document.
//!
//! The shape a realtime store keeps for one room. Updates are whole
//! document replacements (last write wins); the store and its transport
//! are not part of this crate.

use serde::{Deserialize, Serialize};

use crate::core::BOARD_SIZE;

/// One room as stored remotely. Field names are camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameDocument {
    /// Store-assigned key. `None` until the room is created remotely.
    pub id: Option<String>,
    /// Room name shown in the lobby.
    pub name: String,
    /// Host id, plays X.
    pub player1: String,
    /// Guest id, plays O. `None` while the seat is open.
    pub player2: Option<String>,
    /// Id of the participant to move.
    pub current_player: Option<String>,
    /// Cell ordinals (0 empty, 1 X, 2 O).
    pub board: Vec<u8>,
    /// The completed line: 3 indices when won, empty otherwise.
    pub winning_combination: Vec<usize>,
    /// Id of the winning participant.
    pub winner: Option<String>,
    /// Round finished (won or drawn).
    pub game_over: bool,
    /// No mark placed yet this round.
    pub first_move: bool,
    /// Rounds won by the host (X).
    pub player1_victories: u32,
    /// Rounds won by the guest (O).
    pub player2_victories: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Default for GameDocument {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            player1: String::new(),
            player2: None,
            current_player: None,
            board: vec![0; BOARD_SIZE],
            winning_combination: Vec::new(),
            winner: None,
            game_over: false,
            first_move: true,
            player1_victories: 0,
            player2_victories: 0,
            draws: 0,
        }
    }
}
