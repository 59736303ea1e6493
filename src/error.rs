//! Error types for move validation, queries and game setup.
//!
//! Every error here is a normal, expected outcome: a rejected move leaves the
//! board and all counters untouched, so callers can branch on the variant and
//! keep playing.

use thiserror::Error;

use crate::core::{Coord, Square};

/// Reason a move attempt was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// Origin or destination lies off the 6x6 board.
    #[error("location {0} is off the board")]
    OutOfRange(Coord),

    /// The origin square holds no pieces.
    #[error("no pieces at origin {0}")]
    EmptyOrigin(Square),

    /// Requested count is outside the allowed range or exceeds the origin stack.
    #[error("invalid number of pieces: requested {requested}, stack holds {available}")]
    WrongPieceCount { requested: usize, available: usize },

    /// The top piece of the origin stack belongs to the other player.
    #[error("top piece at {origin} is not owned by the player to move")]
    WrongOwner { origin: Square },

    /// Origin and destination share neither a row nor a column.
    #[error("diagonal move from {from} to {to}")]
    DiagonalMove { from: Square, to: Square },

    /// Distance travelled differs from the number of pieces moved.
    #[error("move length {distance} does not match piece count {count}")]
    WrongMoveLength { distance: usize, count: usize },

    /// The named player tried to move out of turn.
    #[error("not {player}'s turn")]
    NotYourTurn { player: String },

    /// A reserve placement was attempted with an empty reserve.
    #[error("{player} has no pieces in reserve")]
    NoReserve { player: String },
}

/// Errors returned by the player-facing game API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FocusError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    /// The name matches neither player.
    #[error("invalid player name: {0}")]
    InvalidPlayer(String),
}

impl FocusError {
    /// Get the move rejection reason, if this is one.
    #[must_use]
    pub fn as_invalid_move(&self) -> Option<&InvalidMove> {
        match self {
            FocusError::InvalidMove(reason) => Some(reason),
            FocusError::InvalidPlayer(_) => None,
        }
    }
}

/// Errors raised while configuring a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("both players are named {0:?}")]
    DuplicateName(String),

    #[error("both players use piece {0}")]
    DuplicatePiece(char),

    #[error("config validation error: {0}")]
    Validation(String),
}
