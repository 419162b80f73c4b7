//! Core game types: coordinates, players and pieces, the board, turns,
//! errors and RNG.
//!
//! This module is pure data. What is legal on a board lives in `rules`.

pub mod action;
pub mod board;
pub mod error;
pub mod geometry;
pub mod player;
pub mod rng;

pub use action::{Decision, Move, Phase, PlyRecord};
pub use board::{Board, GameBoard, Height, HeightGrid, MAX_HEIGHT, WINNING_HEIGHT};
pub use error::{BoardError, IllegalMove, RulesError};
pub use geometry::{Coord, Direction, BOARD_SIZE, DIRECTIONS};
pub use player::{PieceId, PieceSlot, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
