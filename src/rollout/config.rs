//! Monte-Carlo rollout configuration.

use serde::{Deserialize, Serialize};

/// Monte-Carlo rollout parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolloutConfig {
    /// Rollouts per scored position (default: 16).
    pub rollouts: u32,

    /// Turns per rollout before it is scored as a draw (default: 40).
    pub max_steps: u32,

    /// Random seed for rollout RNG.
    /// Same seed produces deterministic scores.
    pub seed: u64,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            rollouts: 16,
            max_steps: 40,
            seed: 42,
        }
    }
}

impl RolloutConfig {
    /// Create a new config with a custom rollout count.
    #[must_use]
    pub fn with_rollouts(mut self, rollouts: u32) -> Self {
        self.rollouts = rollouts;
        self
    }

    /// Create a new config with a custom step cap.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
