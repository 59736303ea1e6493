//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats in a game. `PlayerId::FIRST`
//! is the player listed first at construction ("player A").
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Name, piece marker and the two counters (reserve, captured). A `Player`
//! does no validation of its own; the rules code that calls the counter
//! methods is responsible for keeping them meaningful.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::Piece;

/// Number of players in a game of Focus.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: index 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player ("player A").
    pub const FIRST: PlayerId = PlayerId(0);

    /// The second player ("player B").
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Iterate over both player IDs, first player first.
    ///
    /// ```
    /// use focus_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{PlayerId, PlayerMap};
///
/// let mut captured: PlayerMap<u32> = PlayerMap::with_value(0);
/// captured[PlayerId::SECOND] += 2;
///
/// assert_eq!(captured[PlayerId::FIRST], 0);
/// assert_eq!(captured[PlayerId::SECOND], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create from the two entries, first player first.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_pair(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs, first player first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Find the first player whose entry satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<PlayerId> {
        self.iter().find(|&(_, v)| pred(v)).map(|(id, _)| id)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One participant: identity plus reserve and captured counters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    piece: Piece,
    reserve: u32,
    captured: u32,
}

impl Player {
    /// Create a player with empty reserve and no captures.
    pub fn new(name: impl Into<String>, piece: impl Into<Piece>) -> Self {
        Self {
            name: name.into(),
            piece: piece.into(),
            reserve: 0,
            captured: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// Pieces this player may place back onto the board.
    #[must_use]
    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    pub fn inc_reserve(&mut self) {
        self.reserve += 1;
    }

    /// Remove one piece from reserve.
    ///
    /// Callers check `reserve() > 0` first; the counter never goes below zero.
    pub fn dec_reserve(&mut self) {
        debug_assert!(self.reserve > 0, "reserve decremented at zero");
        self.reserve = self.reserve.saturating_sub(1);
    }

    /// Opponent pieces permanently removed by this player.
    #[must_use]
    pub fn captured(&self) -> u32 {
        self.captured
    }

    pub fn inc_captured(&mut self) {
        self.captured += 1;
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
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);
        map[PlayerId::FIRST] = 10;
        *map.get_mut(PlayerId::SECOND) = 20;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &10), (PlayerId::SECOND, &20)]);
    }

    #[test]
    fn test_player_map_find() {
        let map = PlayerMap::from_pair("A", "B");
        assert_eq!(map.find(|n| *n == "B"), Some(PlayerId::SECOND));
        assert_eq!(map.find(|n| *n == "C"), None);
    }

    #[test]
    fn test_player_counters() {
        let mut player = Player::new("PlayerA", 'R');
        assert_eq!(player.name(), "PlayerA");
        assert_eq!(player.piece(), Piece::new('R'));
        assert_eq!(player.reserve(), 0);
        assert_eq!(player.captured(), 0);

        player.inc_reserve();
        player.inc_reserve();
        player.dec_reserve();
        player.inc_captured();

        assert_eq!(player.reserve(), 1);
        assert_eq!(player.captured(), 1);
    }
}
