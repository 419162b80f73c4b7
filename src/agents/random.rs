use crate::core::{Coord, Decision, GameRng, Move, Phase, PieceSlot, BOARD_SIZE, DIRECTIONS};
use crate::rules::{legal_turns, EgocentricView};

use super::Agent;

/// Uniform over legal full turns. Never forfeits while a turn exists.
#[derive(Clone, Debug)]
pub struct RandomValidated {
    rng: GameRng,
}

impl RandomValidated {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomValidated {
    fn name(&self) -> &str {
        "random-validated"
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        match phase {
            Phase::Setup => self
                .rng
                .choose(&view.unoccupied())
                .map_or(Decision::NoLegalMove, |&at| Decision::Place(at)),
            Phase::Play => self
                .rng
                .choose(&legal_turns(view))
                .map_or(Decision::NoLegalMove, |&mv| Decision::Play(mv)),
        }
    }
}

/// Uniform over every slot, direction and cell with no validation at all.
/// Loses most games by forfeit; useful as a baseline.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for UniformRandom {
    fn name(&self) -> &str {
        "uniform-random"
    }

    fn decide(&mut self, _view: &EgocentricView, phase: Phase) -> Decision {
        match phase {
            Phase::Setup => Decision::Place(Coord::new(
                self.rng.gen_range_i8(0..BOARD_SIZE),
                self.rng.gen_range_i8(0..BOARD_SIZE),
            )),
            Phase::Play => {
                let slot = PieceSlot::ALL[self.rng.gen_range_usize(0..PieceSlot::ALL.len())];
                let move_dir = DIRECTIONS[self.rng.gen_range_usize(0..DIRECTIONS.len())];
                let build_dir = DIRECTIONS[self.rng.gen_range_usize(0..DIRECTIONS.len())];
                Decision::Play(Move::new(slot, move_dir, build_dir))
            }
        }
    }
}
