//! Injected randomness.
//!
//! The engine never reaches for a global RNG. Every random decision (who
//! opens a round, which corner or empty square the computer takes) goes
//! through a `RandomSource` handed to the engine at construction.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Mockable**: Tests can script exact choices by implementing the trait
//!
//! ```
//! use ttt_engine::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.pick_index(9), b.pick_index(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the random choices the engine makes.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;

    /// Choose uniformly from a slice. Returns `None` if it is empty.
    fn choose(&mut self, items: &[usize]) -> Option<usize> {
        if items.is_empty() {
            return None;
        }
        Some(items[self.pick_index(items.len())])
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}
