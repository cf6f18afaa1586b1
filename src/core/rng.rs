//! Deterministic random number generation owned by a single game.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Serializable**: O(1) state capture and restore for replays
//! - **Owned**: Each `Game` holds its own generator; nothing is global
//!
//! ```
//! use seega::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Tolerance used when walking a cumulative distribution.
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// Deterministic RNG for coin tosses and AI sampling.
///
/// Uses ChaCha8 for speed while keeping a reproducible, seekable stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Generate a uniform float in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Choose an index with probability proportional to its weight.
    ///
    /// Weights are normalized, then the cumulative distribution is walked
    /// against one uniform draw; the first index whose cumulative weight
    /// exceeds the draw (within [`WEIGHT_EPSILON`]) is returned.
    ///
    /// When the walk hits nothing, or the weights sum to ~0, the last index
    /// is returned. Returns `None` only for an empty slice.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let last = weights.len().checked_sub(1)?;

        let total: f64 = weights.iter().sum();
        if total.is_nan() || total <= WEIGHT_EPSILON {
            return Some(last);
        }

        let draw = self.gen_f64();
        let mut cumulative = 0.0;

        for (i, &weight) in weights.iter().enumerate() {
            cumulative += weight / total;
            if cumulative + WEIGHT_EPSILON > draw {
                return Some(i);
            }
        }

        // Floating point edge case - return last candidate
        Some(last)
    }

    /// Get the current state for replay.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position so capture is O(1) regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
