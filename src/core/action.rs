//! Turn representation and agent decisions.
//!
//! A full turn is a `Move`: which of the acting player's pieces to step,
//! where to step it, and where to build from its new cell. Agents answer
//! the referee with a `Decision`, which also covers setup placement and the
//! "nothing legal" answer.

use serde::{Deserialize, Serialize};

use super::geometry::{Coord, Direction};
use super::player::{PieceSlot, PlayerId};

/// A full turn: step one piece, then build next to its new cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub slot: PieceSlot,
    pub move_dir: Direction,
    pub build_dir: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(slot: PieceSlot, move_dir: Direction, build_dir: Direction) -> Self {
        Self {
            slot,
            move_dir,
            build_dir,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} move {} build {}", self.slot, self.move_dir, self.build_dir)
    }
}

/// What the referee is asking an agent for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Place a piece on an empty cell.
    Setup,
    /// Play a full turn.
    Play,
}

/// An agent's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Setup answer: where to put the next piece.
    Place(Coord),
    /// Play answer: the full turn to take.
    Play(Move),
    /// The agent found nothing legal to do. Forfeits the game.
    NoLegalMove,
}

/// A turn applied by the referee, kept for replay and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The turn taken. On a winning ply the build was not performed.
    pub mv: Move,

    /// Ply number, starting at 0 after setup.
    pub ply: u32,

    /// Whether this ply won the game.
    pub won: bool,
}
