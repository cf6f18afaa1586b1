//! Match configuration.
//!
//! The board dimension is the only rule parameter. The rest selects who
//! plays the computer side and how the game's RNG is seeded.

use serde::{Deserialize, Serialize};

use crate::ai::AiStrategy;
use crate::core::ConfigError;

/// Smallest dimension accepted by [`GameConfig::validate`].
///
/// Below 3 no piece can ever be flanked, and a 1×1 board has no placeable
/// cell at all.
pub const MIN_DIMENSION: usize = 3;

/// Configuration for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (classic Seega uses 5, 7 or 9).
    pub dimension: usize,

    /// Whether the side that moves second is computer-controlled.
    pub ai_enabled: bool,

    /// Policy driving the computer side.
    pub ai_strategy: AiStrategy,

    /// Seed for the game RNG (first-move toss and AI sampling).
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: 5,
            ai_enabled: false,
            ai_strategy: AiStrategy::Heuristic,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the board dimension.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Enable the computer player with the given strategy.
    #[must_use]
    pub fn with_ai(mut self, strategy: AiStrategy) -> Self {
        self.ai_enabled = true;
        self.ai_strategy = strategy;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < MIN_DIMENSION {
            return Err(ConfigError::DimensionTooSmall {
                dimension: self.dimension,
                min: MIN_DIMENSION,
            });
        }
        Ok(())
    }
}
