//! Error types for rule violations and malformed boards.
//!
//! - `IllegalMove`: a move or build breaks a game rule. The referee turns it
//!   into a forfeit for the mover.
//! - `RulesError`: everything a full turn can fail with, including a piece
//!   that is not on the board (a broken agent contract, not a rule outcome).
//! - `BoardError`: a board that fails its invariants or cannot be parsed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::Height;
use super::geometry::{Coord, Direction};
use super::player::{PieceId, PlayerId};

/// A move or build that breaks the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum IllegalMove {
    #[error("stepping {dir} from {from} leaves the board")]
    OffBoard { from: Coord, dir: Direction },

    #[error("{0} is not a unit direction")]
    NotADirection(Direction),

    #[error("{0} is occupied")]
    Occupied(Coord),

    #[error("{0} is capped")]
    Capped(Coord),

    #[error("cannot climb from height {from} to height {to}")]
    TooHigh { from: Height, to: Height },
}

/// Failure of a full turn (find piece, move, build).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    #[error("piece {0} not found on board")]
    PieceNotFound(String),

    #[error("no legal move available")]
    NoLegalMove,
}

/// A board that breaks its invariants or a malformed board description.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("height {height} at {at} exceeds the dome level")]
    HeightOutOfRange { at: Coord, height: Height },

    #[error("{player} has {count} pieces on the board")]
    PieceCount { player: PlayerId, count: usize },

    #[error("piece {0} appears more than once")]
    DuplicatePiece(PieceId),

    #[error("{0} is off the board")]
    OffBoard(Coord),

    #[error("{0} is already occupied")]
    Occupied(Coord),

    #[error("row {row}: {reason}")]
    Parse { row: usize, reason: String },
}
