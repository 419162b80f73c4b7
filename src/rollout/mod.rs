//! Monte-Carlo evaluation by rollouts.
//!
//! A candidate turn is applied to a copy of the view, then both sides play
//! `Defensive` from the resulting position. Each rollout takes its own fork
//! of the RNG and its own copy of the board, so rollouts share no state and
//! a fixed seed replays exactly.

mod config;
mod player;
mod simulate;

pub use config::RolloutConfig;
pub use player::MonteCarloPlayer;
pub use simulate::{score_turn, simulate, MonteCarloEvaluator};
