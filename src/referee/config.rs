//! Referee configuration.

use serde::{Deserialize, Serialize};

/// Referee configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
    /// Abort the game after this many plies (default: no cap).
    /// The rules have no draw, so two agents that never lose can play
    /// forever without one.
    pub max_plies: Option<u32>,
}

impl RefereeConfig {
    /// Create a new config with a ply cap.
    #[must_use]
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }
}
