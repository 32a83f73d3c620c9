//! Engine configuration.
//!
//! One engine covers every variant of the game: fixed or random opener,
//! computer opponent or two local humans, difficulty tiers on or off.
//! Variants pick their behavior through `EngineConfig` rather than
//! through separate implementations.

use serde::{Deserialize, Serialize};

use super::cell::Player;
use super::rng::RandomSource;

/// Computer opponent strength.
///
/// Selects which steps of the computer-move policy run. Ordinals
/// (`Easy = 0`, `Harder = 1`, `Expert = 2`) are the stored encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Take a winning move, else block, else random.
    Harder,
    /// Win, block, then center/corner/edge, then random.
    #[default]
    Expert,
}

impl Difficulty {
    /// All tiers in ascending strength.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Harder, Difficulty::Expert];

    /// Get the stored ordinal.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Harder => 1,
            Difficulty::Expert => 2,
        }
    }

    /// Decode a stored ordinal. Anything unknown reads as `Expert`.
    #[must_use]
    pub const fn from_ordinal(value: u8) -> Self {
        match value {
            0 => Difficulty::Easy,
            1 => Difficulty::Harder,
            _ => Difficulty::Expert,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Harder => "Harder",
            Difficulty::Expert => "Expert",
        };
        f.write_str(name)
    }
}

/// Who opens each round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    /// Fair coin flip per round.
    #[default]
    Random,
    /// Always the same side.
    Fixed(Player),
}

impl FirstPlayer {
    /// Decide the opener for a new round.
    pub fn resolve<R: RandomSource + ?Sized>(self, rng: &mut R) -> Player {
        match self {
            FirstPlayer::Random => {
                if rng.coin_flip() {
                    Player::X
                } else {
                    Player::O
                }
            }
            FirstPlayer::Fixed(player) => player,
        }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the engine's own `GameRng`.
    /// Ignored when an RNG is injected directly.
    pub seed: u64,

    /// Opening rule for every round.
    pub first_player: FirstPlayer,

    /// Side played by the computer. `None` means both sides are local humans.
    pub computer: Option<Player>,

    /// Initial difficulty.
    pub difficulty: Difficulty,

    /// Whether the difficulty setting is honored.
    /// When off, the computer always plays the fixed win/block/random policy.
    pub difficulty_tiers: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_player: FirstPlayer::Random,
            computer: Some(Player::O),
            difficulty: Difficulty::Expert,
            difficulty_tiers: true,
        }
    }
}

impl EngineConfig {
    /// Create a config with defaults (computer plays O, random opener, Expert).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the opening rule.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Let the computer play `side`.
    pub fn with_computer(mut self, side: Player) -> Self {
        self.computer = Some(side);
        self
    }

    /// Two local humans, no computer.
    pub fn hotseat(mut self) -> Self {
        self.computer = None;
        self
    }

    /// Set the initial difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Ignore difficulty and always play win/block/random.
    pub fn without_difficulty_tiers(mut self) -> Self {
        self.difficulty_tiers = false;
        self
    }

    /// The side the local human plays against the computer.
    ///
    /// `None` in hotseat sessions.
    #[must_use]
    pub fn human(&self) -> Option<Player> {
        self.computer.map(Player::opposite)
    }

    /// The tier the policy actually runs for a requested difficulty.
    #[must_use]
    pub fn effective_difficulty(&self, requested: Difficulty) -> Difficulty {
        if self.difficulty_tiers {
            requested
        } else {
            Difficulty::Harder
        }
    }
}
