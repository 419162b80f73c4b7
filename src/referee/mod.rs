//! Game referee.
//!
//! Owns the canonical board, asks each agent for a decision on its own
//! egocentric view, and applies or rejects it. See `Referee`.

mod config;
mod game;

pub use config::RefereeConfig;
pub use game::{
    ForfeitReason, GameObserver, GameOutcome, GamePhase, NullObserver, Referee, Victory,
};
