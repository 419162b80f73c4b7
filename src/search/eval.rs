//! Static evaluation.

use crate::core::Coord;
use crate::rules::EgocentricView;

/// Score of a won position for the side to move. Every other score lies
/// strictly between `-WIN_SCORE` and `WIN_SCORE`.
pub const WIN_SCORE: i32 = 1000;

/// Bound wider than any score, for the initial alpha-beta window.
pub const INFINITY: i32 = WIN_SCORE + 1;

/// Static evaluation of a position, relative to the side to move (`Mine`).
///
/// Implementations must be zero-sum: swapping the view's perspective
/// negates the score.
pub trait Evaluator {
    fn evaluate(&mut self, view: &EgocentricView) -> i32;
}

/// Height squared plus closeness to the centre, mine minus theirs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeightCentrality;

impl HeightCentrality {
    /// Largest Manhattan distance from the centre on a 5x5 board.
    const MAX_DISTANCE: i32 = 4;

    fn piece_value(view: &EgocentricView, at: Coord) -> i32 {
        let height = i32::from(view.height(at));
        let centrality = Self::MAX_DISTANCE - i32::from(at.manhattan(Coord::CENTER));
        height * height + centrality
    }
}

impl Evaluator for HeightCentrality {
    fn evaluate(&mut self, view: &EgocentricView) -> i32 {
        view.pieces()
            .map(|(at, occupant)| {
                let value = Self::piece_value(view, at);
                if occupant.is_mine() {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
