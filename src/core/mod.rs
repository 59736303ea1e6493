//! Core types: pieces, coordinates, players, board, actions, state, configuration.
//!
//! Plain data with no rule logic beyond bounds and bookkeeping. The move rules
//! live in `rules`, and the player-facing game in `games::focus`.

pub mod piece;
pub mod coord;
pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use piece::Piece;
pub use coord::{Coord, Origin, Square, BOARD_SIZE};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use board::{Board, Stack};
pub use config::FocusConfig;
pub use action::Action;
pub use state::{GameState, Turn};
