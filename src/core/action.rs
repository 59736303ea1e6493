//! Action representation.
//!
//! An `Action` is a fully specified move a player could submit: either a
//! stack move between two squares or a reserve placement. Actions are what
//! `RulesEngine::legal_actions` enumerates and `apply_action` consumes; they
//! carry no player, the caller says who is acting.

use serde::{Deserialize, Serialize};

use super::coord::{Origin, Square};

/// A complete move.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{Action, Origin, Square};
///
/// let from = Square::new(0, 0).unwrap();
/// let to = Square::new(0, 1).unwrap();
///
/// let slide = Action::stack(from, to, 1);
/// assert_eq!(slide.origin(), Origin::Board(from));
///
/// let drop = Action::reserve(to);
/// assert_eq!(drop.count(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top `count` pieces from `origin` to `destination`.
    Stack {
        origin: Square,
        destination: Square,
        count: usize,
    },
    /// Place one piece from reserve onto `destination`.
    Reserve { destination: Square },
}

impl Action {
    /// Create a stack move.
    #[must_use]
    pub fn stack(origin: Square, destination: Square, count: usize) -> Self {
        Action::Stack {
            origin,
            destination,
            count,
        }
    }

    /// Create a reserve placement.
    #[must_use]
    pub fn reserve(destination: Square) -> Self {
        Action::Reserve { destination }
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        match self {
            Action::Stack { origin, .. } => Origin::Board(*origin),
            Action::Reserve { .. } => Origin::Reserve,
        }
    }

    #[must_use]
    pub fn destination(&self) -> Square {
        match self {
            Action::Stack { destination, .. } | Action::Reserve { destination } => *destination,
        }
    }

    /// Number of pieces moved (always 1 for reserve placements).
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Action::Stack { count, .. } => *count,
            Action::Reserve { .. } => 1,
        }
    }
}
