use crate::agents::{place_centrally, Agent};
use crate::core::{Decision, GameRng, Move, Phase};
use crate::rules::{legal_turns, winning_move, EgocentricView};

use super::config::RolloutConfig;
use super::simulate::score_turn;

/// Agent that scores every legal turn by rollouts and plays the best mean.
///
/// Ties go to the turn enumerated first.
#[derive(Clone, Debug)]
pub struct MonteCarloPlayer {
    config: RolloutConfig,
    rng: GameRng,
}

impl MonteCarloPlayer {
    #[must_use]
    pub fn new(config: RolloutConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &RolloutConfig {
        &self.config
    }

    fn best_turn(&mut self, view: &EgocentricView) -> Option<Move> {
        if let Some(win) = winning_move(view) {
            return Some(win);
        }

        let mut best: Option<(Move, f64)> = None;
        for mv in legal_turns(view) {
            let score = score_turn(view, mv, &self.config, &mut self.rng);
            log::trace!("candidate {mv} scores {score:.3}");
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((mv, score));
            }
        }

        if let Some((mv, score)) = best {
            log::debug!("monte-carlo picks {mv} ({score:.3})");
        }
        best.map(|(mv, _)| mv)
    }
}

impl Agent for MonteCarloPlayer {
    fn name(&self) -> &str {
        "monte-carlo"
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        match phase {
            Phase::Setup => place_centrally(view, &mut self.rng),
            Phase::Play => self
                .best_turn(view)
                .map_or(Decision::NoLegalMove, Decision::Play),
        }
    }
}
