//! Search node with in-place apply/undo.

use crate::core::{Coord, Direction};
use crate::rules::perspective::swap_in_place;
use crate::rules::{apply_build, is_winning_cell, move_piece, steps_by_height, EgocentricView, Step};

/// A position seen by the side to move, plus the color of that side
/// relative to the search root (`+1` at the root, `-1` one ply down).
///
/// The search advances and restores one node in place instead of cloning a
/// board per branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    view: EgocentricView,
    color: i32,
}

/// What `SearchNode::apply` changed, for `SearchNode::undo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Undo {
    from: Coord,
    to: Coord,
    built: Coord,
}

impl SearchNode {
    /// A root node: `view`'s `Mine` side is to move.
    #[must_use]
    pub fn new(view: EgocentricView) -> Self {
        Self { view, color: 1 }
    }

    #[must_use]
    pub fn with_color(mut self, color: i32) -> Self {
        debug_assert!(color == 1 || color == -1, "color must be +1 or -1");
        self.color = color;
        self
    }

    #[must_use]
    pub fn view(&self) -> &EgocentricView {
        &self.view
    }

    #[must_use]
    pub fn color(&self) -> i32 {
        self.color
    }

    #[must_use]
    pub fn into_view(self) -> EgocentricView {
        self.view
    }

    /// The previous ply already won: an opponent piece stands on a winning
    /// cell.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.view
            .pieces()
            .any(|(at, occupant)| occupant.is_opponent() && is_winning_cell(&self.view, at))
    }

    /// Legal steps for the side to move, highest destination first.
    #[must_use]
    pub fn ordered_steps(&self) -> Vec<Step> {
        steps_by_height(&self.view)
    }

    /// Take `step`, build in `build_dir`, and hand the turn to the other side.
    ///
    /// # Panics
    ///
    /// If the step or build is illegal. Both come from move generation on
    /// this node, so a failure is a search bug.
    pub fn apply(&mut self, step: &Step, build_dir: Direction) -> Undo {
        let to = move_piece(&mut self.view, step.from, step.dir)
            .expect("generated step must be legal");
        let built =
            apply_build(&mut self.view, to, build_dir).expect("generated build must be legal");
        swap_in_place(&mut self.view);
        self.color = -self.color;
        Undo {
            from: step.from,
            to,
            built,
        }
    }

    /// Reverse an `apply`. Undos must be replayed in reverse order.
    ///
    /// # Panics
    ///
    /// If the moved piece is not where `apply` left it.
    pub fn undo(&mut self, undo: Undo) {
        self.color = -self.color;
        swap_in_place(&mut self.view);
        self.view.lower(undo.built);
        let piece = self
            .view
            .take(undo.to)
            .expect("undo must find the moved piece");
        self.view.put(undo.from, piece);
    }
}
