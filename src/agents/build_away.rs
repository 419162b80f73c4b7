use crate::core::{Decision, Direction, GameRng, Phase};
use crate::rules::{opponent_coordinates, EgocentricView};

use super::climb::climb_turn;
use super::{place_centrally, Agent};

/// Climbs like `ClimbHighest` but builds where no opponent piece can use
/// the new level next turn, when such a build exists.
#[derive(Clone, Debug)]
pub struct BuildAway {
    rng: GameRng,
}

impl BuildAway {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for BuildAway {
    fn name(&self) -> &str {
        "build-away"
    }

    fn decide(&mut self, view: &EgocentricView, phase: Phase) -> Decision {
        if phase == Phase::Setup {
            return place_centrally(view, &mut self.rng);
        }

        let opponents = opponent_coordinates(view);
        let rng = &mut self.rng;
        let turn = climb_turn(view, |step, builds| {
            let away: Vec<Direction> = builds
                .iter()
                .copied()
                .filter(|&dir| {
                    step.dest
                        .offset(dir)
                        .is_some_and(|at| opponents.iter().all(|o| !o.is_adjacent(at)))
                })
                .collect();
            if away.is_empty() {
                rng.choose(builds).copied()
            } else {
                rng.choose(&away).copied()
            }
        });
        turn.map_or(Decision::NoLegalMove, Decision::Play)
    }
}
