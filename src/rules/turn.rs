//! Full turns: enumeration over an egocentric view and application to any
//! board.

use std::cmp::Reverse;

use smallvec::SmallVec;

use crate::core::{Board, Coord, Direction, Move, PieceSlot, RulesError};

use super::legality::{
    check_build, find_piece, is_winning_cell, move_piece, valid_build_directions,
    valid_move_directions, Directions,
};
use super::perspective::{EgocentricView, Occupant};

/// Result of a successfully applied turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The piece stepped onto a winning cell. No build happened.
    Won { at: Coord },
    /// The piece moved to `at` and raised `built`.
    Built { at: Coord, built: Coord },
}

/// Apply a full turn for `piece`: find it, move it, check for the win,
/// then build.
///
/// The board is left unchanged when the turn fails.
pub fn play_turn<P: Copy + PartialEq + std::fmt::Debug>(
    board: &mut Board<P>,
    piece: P,
    mv: Move,
) -> Result<TurnOutcome, RulesError> {
    let from = find_piece(board, piece)?;
    let at = move_piece(board, from, mv.move_dir)?;

    if is_winning_cell(board, at) {
        return Ok(TurnOutcome::Won { at });
    }

    match check_build(board, at, mv.build_dir, None) {
        Ok(built) => {
            board.raise(built);
            Ok(TurnOutcome::Built { at, built })
        }
        Err(err) => {
            // Roll the step back so a rejected turn has no effect.
            if let Some(p) = board.take(at) {
                board.put(from, p);
            }
            Err(err.into())
        }
    }
}

/// One legal step for one of my pieces, before any build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub slot: PieceSlot,
    pub from: Coord,
    pub dir: Direction,
    pub dest: Coord,
}

impl Step {
    #[must_use]
    pub fn wins(&self, view: &EgocentricView) -> bool {
        is_winning_cell(view, self.dest)
    }

    /// Builds available from the destination, computed before the step is
    /// taken so the vacated cell counts as empty.
    #[must_use]
    pub fn builds(&self, view: &EgocentricView) -> Directions {
        valid_build_directions(view, self.dest, Some(Occupant::Mine(self.slot)))
    }

    /// The full turn for this step and `build_dir`.
    #[must_use]
    pub fn with_build(&self, build_dir: Direction) -> Move {
        Move::new(self.slot, self.dir, build_dir)
    }

    /// The full turn for a winning step. The build is never applied.
    #[must_use]
    pub fn winning(&self) -> Move {
        Move::new(self.slot, self.dir, self.dir.reverse())
    }
}

/// My legal steps, slot then direction order.
#[must_use]
pub fn legal_steps(view: &EgocentricView) -> Vec<Step> {
    let mut steps = Vec::new();
    for slot in PieceSlot::ALL {
        let Ok(from) = find_piece(view, Occupant::Mine(slot)) else {
            continue;
        };
        for dir in valid_move_directions(view, from) {
            if let Some(dest) = from.offset(dir) {
                steps.push(Step { slot, from, dir, dest });
            }
        }
    }
    steps
}

/// My legal steps, highest destination first. The sort is stable, so slot
/// and direction order survive within one height.
#[must_use]
pub fn steps_by_height(view: &EgocentricView) -> Vec<Step> {
    let mut steps = legal_steps(view);
    steps.sort_by_key(|step| Reverse(view.height(step.dest)));
    steps
}

/// Every legal full turn for my pieces, in slot, move direction, build
/// direction order.
///
/// A winning step carries the reverse direction as its build, which points
/// at the cell just vacated and is never applied.
#[must_use]
pub fn legal_turns(view: &EgocentricView) -> Vec<Move> {
    let mut turns = Vec::new();
    for step in legal_steps(view) {
        if step.wins(view) {
            turns.push(step.winning());
        } else {
            turns.extend(step.builds(view).into_iter().map(|dir| step.with_build(dir)));
        }
    }
    turns
}

/// Whether I have at least one legal full turn.
#[must_use]
pub fn has_legal_turn(view: &EgocentricView) -> bool {
    legal_steps(view)
        .iter()
        .any(|step| step.wins(view) || !step.builds(view).is_empty())
}

/// The first step onto a winning cell available to me, if any.
#[must_use]
pub fn winning_move(view: &EgocentricView) -> Option<Move> {
    legal_steps(view)
        .into_iter()
        .find(|step| step.wins(view))
        .map(|step| step.winning())
}

/// Cells of opponent pieces, in reading order.
#[must_use]
pub fn opponent_coordinates(view: &EgocentricView) -> SmallVec<[Coord; 2]> {
    view.pieces()
        .filter(|(_, occupant)| occupant.is_opponent())
        .map(|(at, _)| at)
        .collect()
}

/// Winning cells an opponent piece could step onto next turn.
#[must_use]
pub fn opponent_threats(view: &EgocentricView) -> SmallVec<[Coord; 4]> {
    let mut threats: SmallVec<[Coord; 4]> = SmallVec::new();
    for from in opponent_coordinates(view) {
        for dir in valid_move_directions(view, from) {
            if let Some(dest) = from.offset(dir) {
                if is_winning_cell(view, dest) && !threats.contains(&dest) {
                    threats.push(dest);
                }
            }
        }
    }
    threats
}
