//! Game rules.
//!
//! - `legality`: per-cell move and build checks shared by generation and
//!   execution
//! - `turn`: full turns (move then build), enumeration and win detection
//! - `perspective`: the Mine/Opponent view agents and the search work in
//!
//! Everything here is generic over the occupant type, so the referee's
//! canonical board and an agent's egocentric view go through the same code.

pub mod legality;
pub mod perspective;
pub mod turn;

pub use legality::{
    apply_build, apply_move, check_build, check_move, find_piece, is_winning_cell, move_piece,
    valid_build_directions, valid_move_directions, Directions,
};
pub use perspective::{swap_perspective, to_egocentric, EgocentricView, Occupant};
pub use turn::{
    has_legal_turn, legal_steps, legal_turns, opponent_coordinates, opponent_threats, play_turn,
    steps_by_height, winning_move, Step, TurnOutcome,
};
