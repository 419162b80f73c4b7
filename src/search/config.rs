//! Negamax configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Negamax configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below each root child (default: 2).
    /// Depth 0 scores root children by static evaluation alone.
    pub depth: u32,

    /// Optional wall-clock allowance per node.
    /// `None` searches to full depth however long it takes.
    pub time_box: Option<TimeBox>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            time_box: None,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a per-node time allowance.
    #[must_use]
    pub fn with_time_box(mut self, time_box: TimeBox) -> Self {
        self.time_box = Some(time_box);
        self
    }
}

/// Per-node time allowance that grows exponentially with the depth left
/// below the node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeBox {
    /// Allowance of a node at depth 0.
    pub unit: Duration,

    /// Multiplier per remaining ply. Roughly the effective branching factor.
    pub growth: f64,
}

impl Default for TimeBox {
    fn default() -> Self {
        Self {
            unit: Duration::from_micros(50),
            growth: 8.0,
        }
    }
}

impl TimeBox {
    #[must_use]
    pub fn new(unit: Duration, growth: f64) -> Self {
        Self { unit, growth }
    }

    /// `unit * growth^depth`, saturating.
    #[must_use]
    pub fn allowance(&self, depth: u32) -> Duration {
        let exponent = i32::try_from(depth).unwrap_or(i32::MAX);
        let secs = self.unit.as_secs_f64() * self.growth.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}
