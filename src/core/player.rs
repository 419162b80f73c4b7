//! Player and piece identification.
//!
//! ## PlayerId
//!
//! One of the two seats. Player 0 places and moves first.
//!
//! ## PieceSlot / PieceId
//!
//! Each player owns exactly two pieces, told apart by slot. A `PieceId`
//! names a piece in absolute terms (owner + slot) on the canonical board.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a two-element array.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, `0` or `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID. Panics for anything other than 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Only two players supported");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players in seating order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Which of a player's two pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceSlot {
    First,
    Second,
}

impl PieceSlot {
    pub const ALL: [PieceSlot; 2] = [PieceSlot::First, PieceSlot::Second];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PieceSlot::First => 0,
            PieceSlot::Second => 1,
        }
    }

    /// Slot for the `n`th piece a player places.
    #[must_use]
    pub const fn from_index(n: usize) -> Option<Self> {
        match n {
            0 => Some(PieceSlot::First),
            1 => Some(PieceSlot::Second),
            _ => None,
        }
    }

    /// Single-letter label, `A` or `B`.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            PieceSlot::First => 'A',
            PieceSlot::Second => 'B',
        }
    }
}

impl std::fmt::Display for PieceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Absolute identity of a piece on the canonical board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId {
    pub owner: PlayerId,
    pub slot: PieceSlot,
}

impl PieceId {
    #[must_use]
    pub const fn new(owner: PlayerId, slot: PieceSlot) -> Self {
        Self { owner, slot }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.slot)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_santorini::core::{PlayerId, PlayerMap};
///
/// let mut placed: PlayerMap<u8> = PlayerMap::with_value(0);
/// placed[PlayerId::SECOND] += 1;
/// assert_eq!(placed[PlayerId::FIRST], 0);
/// assert_eq!(placed[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent().opponent(), PlayerId::SECOND);
        assert_eq!(format!("{}", PlayerId::new(1)), "Player 1");
    }

    #[test]
    #[should_panic(expected = "Only two players supported")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_piece_slots() {
        assert_eq!(PieceSlot::from_index(0), Some(PieceSlot::First));
        assert_eq!(PieceSlot::from_index(1), Some(PieceSlot::Second));
        assert_eq!(PieceSlot::from_index(2), None);
        assert_eq!(PieceSlot::Second.label(), 'B');

        let piece = PieceId::new(PlayerId::SECOND, PieceSlot::First);
        assert_eq!(format!("{}", piece), "Player 1/A");
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);

        map[PlayerId::FIRST] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &5), (PlayerId::SECOND, &10)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.index() as u8 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
