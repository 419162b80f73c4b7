use crate::agents::{place_centrally, Agent};
use crate::core::{Decision, GameRng, Phase};
use crate::rules::EgocentricView;

use super::config::SearchConfig;
use super::eval::{Evaluator, HeightCentrality};
use super::negamax::Negamax;

/// Agent that plays the negamax choice. Setup placement is central.
#[derive(Clone, Debug)]
pub struct NegamaxPlayer<E = HeightCentrality> {
    search: Negamax<E>,
    rng: GameRng,
}

impl NegamaxPlayer<HeightCentrality> {
    #[must_use]
    pub fn new(config: SearchConfig, rng: GameRng) -> Self {
        Self {
            search: Negamax::new(config),
            rng,
        }
    }
}

impl<E: Evaluator> NegamaxPlayer<E> {
    #[must_use]
    pub fn with_evaluator(config: SearchConfig, evaluator: E, rng: GameRng) -> Self {
        Self {
            search: Negamax::with_evaluator(config, evaluator),
            rng,
        }
    }

    #[must_use]
    pub fn search(&self) -> &Negamax<E> {
        &self.search
    }
}

impl<E: Evaluator> Agent for NegamaxPlayer<E> {
    fn name(&self) -> &str {
        "negamax"
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        match phase {
            Phase::Setup => place_centrally(view, &mut self.rng),
            Phase::Play => self
                .search
                .search(view)
                .best
                .map_or(Decision::NoLegalMove, Decision::Play),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, Direction, Move, PieceSlot};

    #[test]
    fn test_finds_forced_win_in_two() {
        let view = EgocentricView::from_rows(
            ["00000", "00000", "00000", "02024", "02204"],
            ["O    ", "     ", "     ", "     ", " OAB "],
        )
        .unwrap();
        let mut player = NegamaxPlayer::new(SearchConfig::default().with_depth(2), GameRng::new(0));

        assert_eq!(
            player.decide(&view, Phase::Play),
            Decision::Play(Move::new(PieceSlot::Second, Direction::new(-1, -1), Direction::new(1, 0)))
        );
    }

    #[test]
    fn test_setup_is_central() {
        let view = EgocentricView::from_rows(["00000"; 5], ["     "; 5]).unwrap();
        let mut player = NegamaxPlayer::new(SearchConfig::default(), GameRng::new(0));
        assert_eq!(player.decide(&view, Phase::Setup), Decision::Place(Coord::CENTER));
    }
}
