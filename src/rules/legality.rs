//! Move and build legality.
//!
//! One check per action kind (`check_move`, `check_build`) is shared by move
//! generation and move execution so the two can never disagree. The step
//! rule is single-level: a piece may climb at most one level, drop any
//! number of levels, and never enter a dome.

use smallvec::SmallVec;

use crate::core::{
    Board, Coord, Direction, IllegalMove, RulesError, DIRECTIONS, MAX_HEIGHT, WINNING_HEIGHT,
};

/// Directions out of one cell. At most eight.
pub type Directions = SmallVec<[Direction; 8]>;

/// Validate stepping the piece on `from` one cell in `dir`.
///
/// Returns the destination.
pub fn check_move<P: Copy>(board: &Board<P>, from: Coord, dir: Direction) -> Result<Coord, IllegalMove> {
    if !dir.is_unit() {
        return Err(IllegalMove::NotADirection(dir));
    }
    let dest = from.offset(dir).ok_or(IllegalMove::OffBoard { from, dir })?;
    if !board.is_empty(dest) {
        return Err(IllegalMove::Occupied(dest));
    }
    let (base, target) = (board.height(from), board.height(dest));
    if target >= MAX_HEIGHT {
        return Err(IllegalMove::Capped(dest));
    }
    if target > base + 1 {
        return Err(IllegalMove::TooHigh { from: base, to: target });
    }
    Ok(dest)
}

/// Validate building one cell in `dir` from `at`.
///
/// A cell holding `builder` counts as empty: builds may be computed before
/// the builder leaves its current cell.
pub fn check_build<P: Copy + PartialEq>(
    board: &Board<P>,
    at: Coord,
    dir: Direction,
    builder: Option<P>,
) -> Result<Coord, IllegalMove> {
    if !dir.is_unit() {
        return Err(IllegalMove::NotADirection(dir));
    }
    let dest = at.offset(dir).ok_or(IllegalMove::OffBoard { from: at, dir })?;
    match board.occupant(dest) {
        Some(piece) if Some(piece) != builder => return Err(IllegalMove::Occupied(dest)),
        _ => {}
    }
    if board.height(dest) >= MAX_HEIGHT {
        return Err(IllegalMove::Capped(dest));
    }
    Ok(dest)
}

/// Directions the piece on `at` may step in.
#[must_use]
pub fn valid_move_directions<P: Copy>(board: &Board<P>, at: Coord) -> Directions {
    DIRECTIONS
        .iter()
        .copied()
        .filter(|&dir| check_move(board, at, dir).is_ok())
        .collect()
}

/// Directions a piece standing on `at` may build in.
///
/// Pass the acting piece as `builder` when it still stands on its source
/// cell, so building on the cell it is about to vacate is allowed.
#[must_use]
pub fn valid_build_directions<P: Copy + PartialEq>(
    board: &Board<P>,
    at: Coord,
    builder: Option<P>,
) -> Directions {
    DIRECTIONS
        .iter()
        .copied()
        .filter(|&dir| check_build(board, at, dir, builder).is_ok())
        .collect()
}

/// Locate a piece.
///
/// A missing piece means the caller named something that is not in play,
/// which is a contract violation rather than a rule outcome.
pub fn find_piece<P: Copy + PartialEq + std::fmt::Debug>(
    board: &Board<P>,
    piece: P,
) -> Result<Coord, RulesError> {
    board
        .pieces()
        .find(|&(_, p)| p == piece)
        .map(|(at, _)| at)
        .ok_or_else(|| RulesError::PieceNotFound(format!("{piece:?}")))
}

/// Step the piece on `from` one cell in `dir`. Touches occupancy only.
pub fn move_piece<P: Copy>(board: &mut Board<P>, from: Coord, dir: Direction) -> Result<Coord, IllegalMove> {
    let dest = check_move(board, from, dir)?;
    if let Some(piece) = board.take(from) {
        board.put(dest, piece);
    }
    Ok(dest)
}

/// Find `piece` and step it one cell in `dir`.
pub fn apply_move<P: Copy + PartialEq + std::fmt::Debug>(
    board: &mut Board<P>,
    piece: P,
    dir: Direction,
) -> Result<Coord, RulesError> {
    let from = find_piece(board, piece)?;
    Ok(move_piece(board, from, dir)?)
}

/// Raise the cell one step in `dir` from `at`. Touches heights only.
pub fn apply_build<P: Copy + PartialEq>(
    board: &mut Board<P>,
    at: Coord,
    dir: Direction,
) -> Result<Coord, IllegalMove> {
    let dest = check_build(board, at, dir, None)?;
    board.raise(dest);
    Ok(dest)
}

/// A piece that steps onto this cell wins.
#[inline]
#[must_use]
pub fn is_winning_cell<P: Copy>(board: &Board<P>, at: Coord) -> bool {
    board.height(at) == WINNING_HEIGHT
}
