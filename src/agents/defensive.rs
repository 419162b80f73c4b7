use crate::core::{Decision, GameRng, Move, Phase};
use crate::rules::{opponent_threats, steps_by_height, winning_move, EgocentricView};

use super::{Agent, BuildAway};

/// Wins when it can, caps a cell the opponent could win on next turn when it
/// can, and otherwise plays like `BuildAway`.
#[derive(Clone, Debug)]
pub struct Defensive {
    fallback: BuildAway,
}

impl Defensive {
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        Self {
            fallback: BuildAway::new(rng.fork()),
        }
    }

    /// A turn whose build domes one of the opponent's winning cells.
    fn block(view: &EgocentricView) -> Option<Move> {
        let threats = opponent_threats(view);
        if threats.is_empty() {
            return None;
        }
        log::trace!("opponent threatens {} cell(s)", threats.len());

        steps_by_height(view).into_iter().find_map(|step| {
            step.builds(view)
                .into_iter()
                .find(|&dir| step.dest.offset(dir).is_some_and(|at| threats.contains(&at)))
                .map(|dir| step.with_build(dir))
        })
    }
}

impl Agent for Defensive {
    fn name(&self) -> &str {
        "defensive"
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        if phase == Phase::Play {
            if let Some(win) = winning_move(view) {
                return Decision::Play(win);
            }
            if let Some(block) = Self::block(view) {
                return Decision::Play(block);
            }
        }
        self.fallback.decide(view, phase)
    }
}
