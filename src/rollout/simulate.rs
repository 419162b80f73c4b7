//! Rollouts with `Defensive` on both sides.

use crate::agents::{Agent, Defensive};
use crate::core::{Decision, GameRng, Move, Phase, PlayerId, PlayerMap};
use crate::rules::perspective::swap_in_place;
use crate::rules::{play_turn, swap_perspective, EgocentricView, Occupant, TurnOutcome};
use crate::search::{Evaluator, WIN_SCORE};

use super::config::RolloutConfig;

/// Play one rollout from `start` and score it for the side to move there.
///
/// A game decided on rollout turn `t` scores `1 / (t + 1)` for the winner's
/// side and the negation for the loser's, so quick wins count more than slow
/// ones. A forfeit is a loss for the side that forfeits. A rollout still
/// running after `max_steps` turns scores 0.
pub fn simulate(start: &EgocentricView, rng: &mut GameRng, max_steps: u32) -> f64 {
    let mut view = start.clone();
    let mut agents = PlayerMap::new(|_| Defensive::new(rng.fork()));
    let mut mover = PlayerId::FIRST;

    for turn in 0..max_steps {
        let weight = 1.0 / f64::from(turn + 1);
        let sign = if mover == PlayerId::FIRST { 1.0 } else { -1.0 };

        let won = match agents[mover].decide(&view, Phase::Play) {
            Decision::Play(mv) => match play_turn(&mut view, Occupant::Mine(mv.slot), mv) {
                Ok(TurnOutcome::Won { .. }) => Some(true),
                Ok(TurnOutcome::Built { .. }) => None,
                Err(_) => Some(false),
            },
            Decision::Place(_) | Decision::NoLegalMove => Some(false),
        };

        if let Some(won) = won {
            log::trace!("rollout ends on turn {turn}, mover won: {won}");
            return if won { sign * weight } else { -sign * weight };
        }

        swap_in_place(&mut view);
        mover = mover.opponent();
    }

    0.0
}

/// Score a candidate turn for the side to move in `view` by the mean of
/// `config.rollouts` rollouts from the position it leaves.
///
/// An outright win scores 1 and an illegal candidate -1, without rolling
/// out.
pub fn score_turn(view: &EgocentricView, mv: Move, config: &RolloutConfig, rng: &mut GameRng) -> f64 {
    let mut after = view.clone();
    match play_turn(&mut after, Occupant::Mine(mv.slot), mv) {
        Ok(TurnOutcome::Won { .. }) => 1.0,
        Ok(TurnOutcome::Built { .. }) => {
            let theirs = swap_perspective(&after);
            -mean_rollout(&theirs, config, rng)
        }
        Err(err) => {
            log::debug!("rollout candidate {mv} is illegal: {err}");
            -1.0
        }
    }
}

/// Mean rollout score for the side to move, each rollout on its own fork.
fn mean_rollout(view: &EgocentricView, config: &RolloutConfig, rng: &mut GameRng) -> f64 {
    if config.rollouts == 0 {
        return 0.0;
    }
    let total: f64 = (0..config.rollouts)
        .map(|_| simulate(view, &mut rng.fork(), config.max_steps))
        .sum();
    total / f64::from(config.rollouts)
}

/// Rollout-backed `Evaluator` for the negamax horizon.
///
/// The mean rollout score in `[-1, 1]` is scaled into the open interval
/// `(-WIN_SCORE, WIN_SCORE)` so a sampled estimate never reads as a proven
/// result. Zero-sum only in expectation.
#[derive(Clone, Debug)]
pub struct MonteCarloEvaluator {
    config: RolloutConfig,
    rng: GameRng,
}

impl MonteCarloEvaluator {
    #[must_use]
    pub fn new(config: RolloutConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }
}

impl Evaluator for MonteCarloEvaluator {
    fn evaluate(&mut self, view: &EgocentricView) -> i32 {
        let mean = mean_rollout(view, &self.config, &mut self.rng);
        (mean * f64::from(WIN_SCORE - 1)).round() as i32
    }
}
