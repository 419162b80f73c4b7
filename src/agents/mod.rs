//! Decision agents.
//!
//! An agent sees an egocentric view (its own pieces are `Mine`) and answers
//! the referee with a `Decision`. The greedy agents here form a ladder where
//! each one delegates to a simpler one when it has nothing better:
//!
//! - `ClimbHighest`: step as high as possible, build anywhere
//! - `BuildAway`: same steps, build away from opponent pieces
//! - `Defensive`: win if possible, cap opponent threats, else `BuildAway`
//! - `RandomValidated`: uniform over legal turns
//! - `UniformRandom`: uniform over everything, legal or not
//!
//! The search and rollout agents live in `search` and `rollout`.

mod build_away;
mod climb;
mod defensive;
mod random;

pub use build_away::BuildAway;
pub use climb::ClimbHighest;
pub use defensive::Defensive;
pub use random::{RandomValidated, UniformRandom};

use crate::core::{Coord, Decision, GameRng, Phase};
use crate::rules::EgocentricView;

/// A player. Anything that can answer the referee.
pub trait Agent {
    /// Name used in logs and game records.
    fn name(&self) -> &str;

    /// Answer for the side to move in `view`.
    ///
    /// During `Phase::Setup` the answer is a placement, during
    /// `Phase::Play` a full turn or `Decision::NoLegalMove`.
    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        (**self).decide(view, phase)
    }
}

/// Setup placement: the centre if free, else a random inner cell, else any
/// random empty cell.
pub fn place_centrally(view: &EgocentricView, rng: &mut GameRng) -> Decision {
    if view.is_empty(Coord::CENTER) {
        return Decision::Place(Coord::CENTER);
    }
    let empty = view.unoccupied();
    let inner: Vec<Coord> = empty.iter().copied().filter(|at| !at.is_edge()).collect();
    let pool = if inner.is_empty() { &empty } else { &inner };
    match rng.choose(pool) {
        Some(&at) => Decision::Place(at),
        None => Decision::NoLegalMove,
    }
}
