//! Egocentric views of the board.
//!
//! Agents and the search never see absolute owners. The referee projects
//! the canonical board into a view where the acting player's pieces are
//! `Mine` and the other player's are `Opponent`, so one implementation of
//! every heuristic serves both seats. The search advances a node to the
//! other side's turn by swapping the labels.

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardError, GameBoard, PieceSlot, PlayerId};

/// Occupant of a cell as seen by the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Mine(PieceSlot),
    Opponent(PieceSlot),
}

impl Occupant {
    #[inline]
    #[must_use]
    pub const fn is_mine(self) -> bool {
        matches!(self, Occupant::Mine(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_opponent(self) -> bool {
        matches!(self, Occupant::Opponent(_))
    }

    #[must_use]
    pub const fn slot(self) -> PieceSlot {
        match self {
            Occupant::Mine(slot) | Occupant::Opponent(slot) => slot,
        }
    }

    /// The same piece seen from the other side.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Occupant::Mine(slot) => Occupant::Opponent(slot),
            Occupant::Opponent(slot) => Occupant::Mine(slot),
        }
    }
}

/// A board labelled relative to the side to move.
pub type EgocentricView = Board<Occupant>;

/// Project the canonical board into `player`'s view.
#[must_use]
pub fn to_egocentric(board: &GameBoard, player: PlayerId) -> EgocentricView {
    board.map_pieces(|piece| {
        if piece.owner == player {
            Occupant::Mine(piece.slot)
        } else {
            Occupant::Opponent(piece.slot)
        }
    })
}

/// The same position seen by the other side.
#[must_use]
pub fn swap_perspective(view: &EgocentricView) -> EgocentricView {
    view.map_pieces(Occupant::swapped)
}

/// In-place `swap_perspective`, for the search's apply/undo.
pub(crate) fn swap_in_place(view: &mut EgocentricView) {
    view.map_pieces_in_place(Occupant::swapped);
}

impl Board<Occupant> {
    /// Parse a view. `A`/`B` are my pieces, `O` marks opponent pieces
    /// (slots assigned in reading order), blanks are `' '` or `'.'`.
    ///
    /// ```
    /// use rust_santorini::core::{Coord, PieceSlot};
    /// use rust_santorini::rules::{EgocentricView, Occupant};
    ///
    /// let view = EgocentricView::from_rows(
    ///     ["00000", "00000", "00000", "00000", "00000"],
    ///     ["  O  ", " A   ", " O   ", "     ", "   B "],
    /// ).unwrap();
    /// assert_eq!(view.occupant(Coord::new(3, 4)), Some(Occupant::Mine(PieceSlot::Second)));
    /// assert_eq!(view.occupant(Coord::new(1, 2)), Some(Occupant::Opponent(PieceSlot::Second)));
    /// ```
    pub fn from_rows(heights: [&str; 5], pieces: [&str; 5]) -> Result<Self, BoardError> {
        let mut opponents = 0;
        Self::parse_rows(heights, pieces, |row, ch| match ch {
            'A' => Ok(Occupant::Mine(PieceSlot::First)),
            'B' => Ok(Occupant::Mine(PieceSlot::Second)),
            'O' => {
                let slot = PieceSlot::from_index(opponents).ok_or_else(|| BoardError::Parse {
                    row,
                    reason: "more than two opponent pieces".to_string(),
                })?;
                opponents += 1;
                Ok(Occupant::Opponent(slot))
            }
            other => Err(BoardError::Parse {
                row,
                reason: format!("unknown piece {other:?}"),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, PieceId};

    fn sample_board() -> GameBoard {
        GameBoard::from_rows(
            ["01000", "00200", "00030", "00000", "40000"],
            ["a....", "..y..", ".....", ".z...", "....b"],
        )
        .unwrap()
    }

    #[test]
    fn test_to_egocentric_labels_owner() {
        let board = sample_board();

        let first = to_egocentric(&board, PlayerId::FIRST);
        assert_eq!(first.occupant(Coord::new(0, 0)), Some(Occupant::Mine(PieceSlot::First)));
        assert_eq!(first.occupant(Coord::new(4, 4)), Some(Occupant::Mine(PieceSlot::Second)));
        assert_eq!(first.occupant(Coord::new(2, 1)), Some(Occupant::Opponent(PieceSlot::First)));
        assert_eq!(first.heights(), board.heights());

        let second = to_egocentric(&board, PlayerId::SECOND);
        assert_eq!(second.occupant(Coord::new(1, 3)), Some(Occupant::Mine(PieceSlot::Second)));
        assert_eq!(second.occupant(Coord::new(0, 0)), Some(Occupant::Opponent(PieceSlot::First)));
    }

    #[test]
    fn test_swap_matches_other_seat() {
        let board = sample_board();
        let first = to_egocentric(&board, PlayerId::FIRST);
        let second = to_egocentric(&board, PlayerId::SECOND);

        assert_eq!(swap_perspective(&first), second);
        assert_eq!(swap_perspective(&swap_perspective(&first)), first);
    }

    #[test]
    fn test_swap_in_place() {
        let board = sample_board();
        let mut view = to_egocentric(&board, PlayerId::FIRST);
        swap_in_place(&mut view);
        assert_eq!(view, to_egocentric(&board, PlayerId::SECOND));
    }

    #[test]
    fn test_view_is_detached_from_board() {
        let mut board = sample_board();
        let view = to_egocentric(&board, PlayerId::FIRST);
        board
            .place(Coord::new(3, 3), PieceId::new(PlayerId::SECOND, PieceSlot::First))
            .unwrap();
        assert!(view.is_empty(Coord::new(3, 3)));
    }

    #[test]
    fn test_from_rows_limits_opponents() {
        let view = EgocentricView::from_rows(
            ["00000", "00000", "00000", "00000", "00000"],
            ["O O O", "     ", "     ", "     ", "     "],
        );
        assert!(matches!(view, Err(BoardError::Parse { row: 0, .. })));
    }
}
