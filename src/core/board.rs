//! The 5×5 board: tower heights plus piece occupancy.
//!
//! `Board<P>` is generic over what sits on an occupied cell so the same
//! grid serves as the canonical board (`Board<PieceId>`, absolute owners)
//! and as an agent's egocentric view (`Board<Occupant>`, see
//! `rules::perspective`). Legality code only needs `P: Copy + PartialEq`.
//!
//! Heights only ever go up through the public API. The crate-private
//! `lower` exists for the search's apply/undo pair.

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::geometry::{Coord, BOARD_SIZE};
use super::player::{PieceId, PieceSlot, PlayerId, PlayerMap};

/// Tower height of a cell.
pub type Height = u8;

/// A capped tower (dome). Nothing can be built on or moved onto it.
pub const MAX_HEIGHT: Height = 4;

/// Stepping onto a cell of this height wins the game.
pub const WINNING_HEIGHT: Height = MAX_HEIGHT - 1;

const SIZE: usize = BOARD_SIZE as usize;

/// Heights indexed `[y][x]`.
pub type HeightGrid = [[Height; SIZE]; SIZE];

/// Grid of heights and occupants.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board<P> {
    heights: HeightGrid,
    cells: [[Option<P>; SIZE]; SIZE],
}

/// The referee's board, pieces tagged with their absolute owner.
pub type GameBoard = Board<PieceId>;

impl<P: Copy> Default for Board<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy> Board<P> {
    /// An empty, flat board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_heights([[0; SIZE]; SIZE])
    }

    /// An empty board with the given heights.
    #[must_use]
    pub fn with_heights(heights: HeightGrid) -> Self {
        Self {
            heights,
            cells: [[None; SIZE]; SIZE],
        }
    }

    #[must_use]
    pub fn heights(&self) -> &HeightGrid {
        &self.heights
    }

    #[inline]
    #[must_use]
    pub fn height(&self, at: Coord) -> Height {
        let (row, col) = at.index();
        self.heights[row][col]
    }

    #[inline]
    #[must_use]
    pub fn occupant(&self, at: Coord) -> Option<P> {
        let (row, col) = at.index();
        self.cells[row][col]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.occupant(at).is_none()
    }

    /// Put a piece on an empty cell.
    pub fn place(&mut self, at: Coord, piece: P) -> Result<(), BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::OffBoard(at));
        }
        if !self.is_empty(at) {
            return Err(BoardError::Occupied(at));
        }
        self.put(at, piece);
        Ok(())
    }

    /// Every occupied cell, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, P)> + '_ {
        Coord::all().filter_map(|at| self.occupant(at).map(|piece| (at, piece)))
    }

    /// Every empty cell, row by row.
    #[must_use]
    pub fn unoccupied(&self) -> Vec<Coord> {
        Coord::all().filter(|&at| self.is_empty(at)).collect()
    }

    /// Same heights, occupants relabelled through `f`.
    #[must_use]
    pub fn map_pieces<Q: Copy>(&self, f: impl Fn(P) -> Q) -> Board<Q> {
        Board {
            heights: self.heights,
            cells: self.cells.map(|row| row.map(|cell| cell.map(&f))),
        }
    }

    pub(crate) fn map_pieces_in_place(&mut self, f: impl Fn(P) -> P) {
        for cell in self.cells.iter_mut().flatten() {
            if let Some(piece) = cell {
                *piece = f(*piece);
            }
        }
    }

    pub(crate) fn take(&mut self, at: Coord) -> Option<P> {
        let (row, col) = at.index();
        self.cells[row][col].take()
    }

    pub(crate) fn put(&mut self, at: Coord, piece: P) {
        let (row, col) = at.index();
        debug_assert!(self.cells[row][col].is_none(), "{at} already occupied");
        self.cells[row][col] = Some(piece);
    }

    pub(crate) fn raise(&mut self, at: Coord) {
        let (row, col) = at.index();
        debug_assert!(self.heights[row][col] < MAX_HEIGHT, "{at} already capped");
        self.heights[row][col] += 1;
    }

    pub(crate) fn lower(&mut self, at: Coord) {
        let (row, col) = at.index();
        debug_assert!(self.heights[row][col] > 0, "{at} already flat");
        self.heights[row][col] -= 1;
    }

    /// Build a board from five rows of height digits and five rows of piece
    /// characters, decoding each non-blank piece character with `decode`.
    pub(crate) fn parse_rows(
        heights: [&str; SIZE],
        pieces: [&str; SIZE],
        mut decode: impl FnMut(usize, char) -> Result<P, BoardError>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new();

        for (row, line) in heights.iter().enumerate() {
            let digits: Vec<char> = line.chars().collect();
            if digits.len() != SIZE {
                return Err(BoardError::Parse {
                    row,
                    reason: format!("expected {SIZE} heights, got {:?}", line),
                });
            }
            for (col, ch) in digits.into_iter().enumerate() {
                let height = ch
                    .to_digit(10)
                    .filter(|&h| h <= u32::from(MAX_HEIGHT))
                    .ok_or_else(|| BoardError::Parse {
                        row,
                        reason: format!("bad height {ch:?}"),
                    })?;
                board.heights[row][col] = height as Height;
            }
        }

        for (row, line) in pieces.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != SIZE {
                return Err(BoardError::Parse {
                    row,
                    reason: format!("expected {SIZE} cells, got {:?}", line),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                if ch == ' ' || ch == '.' {
                    continue;
                }
                board.cells[row][col] = Some(decode(row, ch)?);
            }
        }

        Ok(board)
    }
}

impl Board<PieceId> {
    /// Parse a canonical board. Player 0 pieces are `a`/`b`, player 1
    /// pieces are `y`/`z`, blanks are `' '` or `'.'`.
    ///
    /// ```
    /// use rust_santorini::core::{Coord, GameBoard, PieceId, PieceSlot, PlayerId};
    ///
    /// let board = GameBoard::from_rows(
    ///     ["00000", "00000", "00100", "00000", "00000"],
    ///     ["a...y", ".....", ".....", ".....", "b...z"],
    /// ).unwrap();
    /// assert_eq!(board.height(Coord::CENTER), 1);
    /// assert_eq!(
    ///     board.occupant(Coord::new(4, 4)),
    ///     Some(PieceId::new(PlayerId::SECOND, PieceSlot::Second)),
    /// );
    /// ```
    pub fn from_rows(heights: [&str; SIZE], pieces: [&str; SIZE]) -> Result<Self, BoardError> {
        Self::parse_rows(heights, pieces, |row, ch| {
            let (owner, slot) = match ch {
                'a' => (PlayerId::FIRST, PieceSlot::First),
                'b' => (PlayerId::FIRST, PieceSlot::Second),
                'y' => (PlayerId::SECOND, PieceSlot::First),
                'z' => (PlayerId::SECOND, PieceSlot::Second),
                other => {
                    return Err(BoardError::Parse {
                        row,
                        reason: format!("unknown piece {other:?}"),
                    })
                }
            };
            Ok(PieceId::new(owner, slot))
        })
    }

    /// Check the in-play invariants: heights within range, every piece
    /// present exactly once, two pieces per player.
    pub fn validate(&self) -> Result<(), BoardError> {
        for at in Coord::all() {
            let height = self.height(at);
            if height > MAX_HEIGHT {
                return Err(BoardError::HeightOutOfRange { at, height });
            }
        }

        let mut seen: Vec<PieceId> = Vec::with_capacity(4);
        let mut counts: PlayerMap<usize> = PlayerMap::with_value(0);
        for (_, piece) in self.pieces() {
            if seen.contains(&piece) {
                return Err(BoardError::DuplicatePiece(piece));
            }
            seen.push(piece);
            counts[piece.owner] += 1;
        }

        for (player, &count) in counts.iter() {
            if count != PieceSlot::ALL.len() {
                return Err(BoardError::PieceCount { player, count });
            }
        }
        Ok(())
    }
}
