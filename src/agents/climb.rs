use crate::core::{Decision, Direction, GameRng, Move, Phase};
use crate::rules::{steps_by_height, Directions, EgocentricView, Step};

use super::{place_centrally, Agent};

/// Steps as high as it can; builds uniformly at random.
#[derive(Clone, Debug)]
pub struct ClimbHighest {
    rng: GameRng,
}

impl ClimbHighest {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for ClimbHighest {
    fn name(&self) -> &str {
        "climb-highest"
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        match phase {
            Phase::Setup => place_centrally(view, &mut self.rng),
            Phase::Play => {
                let rng = &mut self.rng;
                climb_turn(view, |_, builds| rng.choose(builds).copied())
                    .map_or(Decision::NoLegalMove, Decision::Play)
            }
        }
    }
}

/// The first step in climb order that wins outright or has a build, with the
/// build picked by `select_build`.
///
/// `select_build` only ever sees a non-empty build list. Returning `None`
/// skips the step.
pub(crate) fn climb_turn(
    view: &EgocentricView,
    mut select_build: impl FnMut(&Step, &Directions) -> Option<Direction>,
) -> Option<Move> {
    for step in steps_by_height(view) {
        if step.wins(view) {
            log::trace!("{:?} steps {} onto a winning cell", step.slot, step.dir);
            return Some(step.winning());
        }
        let builds = step.builds(view);
        if builds.is_empty() {
            continue;
        }
        if let Some(build) = select_build(&step, &builds) {
            return Some(step.with_build(build));
        }
    }
    None
}
