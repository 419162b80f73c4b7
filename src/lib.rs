//! # rust-santorini
//!
//! Rules engine and decision agents for a two-player tower-climbing game on
//! a 5x5 board.
//!
//! Each turn a player steps one of its two pieces to an adjacent cell
//! (climbing at most one level, never onto a dome) and then raises a cell
//! next to the piece's new position. Stepping onto a level-3 cell wins at
//! once; a player with no legal turn forfeits.
//!
//! ## Design Principles
//!
//! 1. **Egocentric agents**: agents and the search see a view where their
//!    own pieces are `Mine`, so one implementation plays either seat.
//!
//! 2. **One rule check**: move generation and move execution share the
//!    same legality functions, so they cannot disagree.
//!
//! 3. **Errors stop at the referee**: an illegal decision forfeits the
//!    game for the agent that made it; nothing propagates past a ply.
//!
//! 4. **Deterministic randomness**: every random choice goes through an
//!    injected, seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: coordinates, players and pieces, the board, turns, errors, RNG
//! - `rules`: legality, full turns, egocentric views
//! - `agents`: the `Agent` trait and the greedy heuristic ladder
//! - `search`: negamax with alpha-beta and an optional time box
//! - `rollout`: Monte-Carlo scoring with `Defensive` rollouts
//! - `referee`: setup and turn state machine over the canonical board

pub mod agents;
pub mod core;
pub mod referee;
pub mod rollout;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, Decision, Direction, GameBoard, GameRng, GameRngState, Move, Phase, PieceId,
    PieceSlot, PlayerId, PlayerMap, PlyRecord, DIRECTIONS,
};

pub use crate::core::{BoardError, IllegalMove, RulesError};

pub use crate::rules::{EgocentricView, Occupant, TurnOutcome};

pub use crate::agents::{Agent, BuildAway, ClimbHighest, Defensive, RandomValidated, UniformRandom};

pub use crate::search::{
    Evaluator, HeightCentrality, Negamax, NegamaxPlayer, SearchConfig, SearchResult, SearchStats,
    TimeBox, WIN_SCORE,
};

pub use crate::rollout::{MonteCarloEvaluator, MonteCarloPlayer, RolloutConfig};

pub use crate::referee::{
    ForfeitReason, GameObserver, GameOutcome, GamePhase, Referee, RefereeConfig, Victory,
};
