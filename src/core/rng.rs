//! Deterministic random number generation for simulated opponents.
//!
//! The search itself is deterministic and never touches randomness. The
//! RNG only drives `RandomStrategy`, so that simulated matches can be
//! replayed exactly from a seed.
//!
//! ```
//! use nim_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut other = GameRng::new(42);
//! assert_eq!(rng.gen_take(1..=3), other.gen_take(1..=3));
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG; the same seed always yields the same takes.
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

    /// Pick a take uniformly from a non-empty range.
    ///
    /// Panics if the range is empty.
    pub fn gen_take(&mut self, range: RangeInclusive<u32>) -> u32 {
        assert!(!range.is_empty(), "cannot pick from an empty range");
        self.inner.gen_range(range)
    }
}
