//! Piece markers.
//!
//! A `Piece` is the opaque label a player's pieces carry on the board
//! (for example `'R'` or `'G'`). The board stores copies of the label; it is
//! not a separately owned entity.

use serde::{Deserialize, Serialize};

/// Label identifying which player's piece occupies a stack slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece(pub char);

impl Piece {
    /// Create a new piece marker.
    #[must_use]
    pub const fn new(label: char) -> Self {
        Self(label)
    }

    /// Get the raw label.
    #[must_use]
    pub const fn label(self) -> char {
        self.0
    }
}

impl From<char> for Piece {
    fn from(label: char) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
