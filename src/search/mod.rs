//! Negamax search with alpha-beta pruning.
//!
//! ## Overview
//!
//! - **Egocentric**: every node is a view where the side to move owns the
//!   `Mine` pieces, so one evaluation serves both players
//! - **Apply/undo**: one node is mutated in place for the whole search
//! - **Move ordering**: steps to higher cells first
//! - **Time box**: optional per-node wall-clock allowance growing with the
//!   depth left; a node that overruns returns its best value so far
//! - **Pluggable evaluation**: `Evaluator` at the horizon, `HeightCentrality`
//!   by default, Monte-Carlo rollouts in `rollout`
//!
//! ## Usage
//!
//! ```rust
//! use rust_santorini::rules::EgocentricView;
//! use rust_santorini::search::{Negamax, SearchConfig};
//!
//! let view = EgocentricView::from_rows(
//!     ["00000", "00000", "00100", "00000", "00000"],
//!     ["     ", " A   ", "   O ", " O B ", "     "],
//! ).unwrap();
//!
//! let mut search = Negamax::new(SearchConfig::default().with_depth(1));
//! let result = search.search(&view);
//! assert!(result.best.is_some());
//! ```

mod config;
mod eval;
mod negamax;
mod node;
mod player;
mod stats;

pub use config::{SearchConfig, TimeBox};
pub use eval::{Evaluator, HeightCentrality, INFINITY, WIN_SCORE};
pub use negamax::{Negamax, SearchResult};
pub use node::{SearchNode, Undo};
pub use player::NegamaxPlayer;
pub use stats::SearchStats;
