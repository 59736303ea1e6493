//! # focus-engine
//!
//! Rules engine for the two-player stacking game Focus (Domination).
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every move is checked in full before the
//!    board or any counter changes. A rejected move leaves the game untouched.
//!
//! 2. **Types over sentinels**: reserve moves are `Origin::Reserve`, the
//!    pre-game turn is `Turn::NotStarted`, and board lookups take a `Square`
//!    that cannot be off the board.
//!
//! 3. **Errors are outcomes**: every failure is a typed `FocusError` the
//!    caller branches on. Nothing panics on caller input.
//!
//! ## Architecture
//!
//! - **Player**: name, piece marker, reserve and captured counters.
//! - **Move**: validates one move attempt, then transfers pieces and
//!   redistributes overflow. Borrows the board exclusively for one call.
//! - **FocusGame**: owns board, players and turn; sequences validation,
//!   mutation, win check and turn hand-over.
//!
//! ## Modules
//!
//! - `core`: Pieces, coordinates, players, board, actions, state, configuration
//! - `rules`: `Move` and the `RulesEngine` trait
//! - `games`: The Focus game and its builder
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use focus_engine::FocusGame;
//!
//! let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
//!
//! let outcome = game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
//! assert_eq!(outcome.to_string(), "successfully moved");
//! assert_eq!(game.show_pieces((0, 1)).unwrap().len(), 2);
//!
//! // Nothing in reserve yet.
//! assert!(game.reserved_move("PlayerA", (0, 0)).is_err());
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Coord, FocusConfig, GameState, Origin, Piece, Player, PlayerId, PlayerMap,
    Square, Stack, Turn, BOARD_SIZE,
};

pub use crate::rules::{Move, MoveOutcome, Overflow, RulesEngine};

pub use crate::games::focus::{FocusGame, FocusGameBuilder};

pub use crate::error::{ConfigError, FocusError, InvalidMove};
