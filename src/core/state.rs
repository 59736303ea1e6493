//! Game state: board, players and turn.
//!
//! ## Turn
//!
//! Nobody holds the turn before the first move. The first player to make a
//! legal move claims it; after that it alternates strictly.
//!
//! ## GameState
//!
//! Everything that changes during a match. The board clones in O(1), so a
//! whole-state clone is cheap enough for snapshot comparisons.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::{Player, PlayerId, PlayerMap};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// No move has been made yet; either player may go first.
    #[default]
    NotStarted,
    /// This player moves next.
    Player(PlayerId),
}

impl Turn {
    /// Check whether `player` may move now.
    #[must_use]
    pub fn allows(self, player: PlayerId) -> bool {
        match self {
            Turn::NotStarted => true,
            Turn::Player(current) => current == player,
        }
    }

    /// The player holding the turn, if the game has started.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Turn::NotStarted => None,
            Turn::Player(current) => Some(current),
        }
    }
}

/// Mutable state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Piece stacks.
    pub board: Board,

    /// Both players, first player first.
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub turn: Turn,

    /// Successful moves so far.
    pub move_count: u32,
}

impl GameState {
    /// Create the starting state for two players.
    #[must_use]
    pub fn new(first: Player, second: Player) -> Self {
        let board = Board::starting(first.piece(), second.piece());
        Self {
            board,
            players: PlayerMap::from_pair(first, second),
            turn: Turn::NotStarted,
            move_count: 0,
        }
    }

    /// Hand the turn to the opponent of `mover`.
    pub fn advance_turn(&mut self, mover: PlayerId) {
        self.turn = Turn::Player(mover.opponent());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Piece, Square};

    fn state() -> GameState {
        GameState::new(Player::new("A", 'R'), Player::new("B", 'G'))
    }

    #[test]
    fn test_game_state_new() {
        let state = state();

        assert_eq!(state.turn, Turn::NotStarted);
        assert_eq!(state.move_count, 0);
        assert_eq!(state.players[PlayerId::FIRST].name(), "A");
        assert_eq!(
            state.board.top(Square::new(0, 0).unwrap()),
            Some(Piece::new('R'))
        );
    }

    #[test]
    fn test_turn_allows() {
        assert!(Turn::NotStarted.allows(PlayerId::FIRST));
        assert!(Turn::NotStarted.allows(PlayerId::SECOND));
        assert!(Turn::Player(PlayerId::SECOND).allows(PlayerId::SECOND));
        assert!(!Turn::Player(PlayerId::SECOND).allows(PlayerId::FIRST));
        assert_eq!(Turn::NotStarted.player(), None);
    }

    #[test]
    fn test_advance_turn() {
        let mut state = state();

        state.advance_turn(PlayerId::FIRST);
        assert_eq!(state.turn, Turn::Player(PlayerId::SECOND));

        state.advance_turn(PlayerId::SECOND);
        assert_eq!(state.turn, Turn::Player(PlayerId::FIRST));
    }
}
