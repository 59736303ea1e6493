//! Rules engine trait.
//!
//! The seam between a game and anything driving it generically (tests,
//! benchmarks, a host application):
//! - What actions are legal
//! - How actions modify state
//! - Who has won

use crate::core::{Action, PlayerId};
use crate::error::FocusError;

/// Result of a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was made and the turn passed to the opponent.
    Moved,
    /// The move was made and `winner` has won. The turn did not advance.
    Won { winner: String },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. })
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved => write!(f, "successfully moved"),
            MoveOutcome::Won { winner } => write!(f, "{} wins!", winner),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if the player can't act
/// - `apply_action`: Must leave state untouched when it returns `Err`
/// - `winner`: Return None while nobody has won
pub trait RulesEngine {
    /// Enumerate every legal action for a player.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// Apply an action on behalf of a player.
    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<MoveOutcome, FocusError>;

    /// The player who has won, if any.
    fn winner(&self) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Check whether the game has been won.
    fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Check whether `action` is currently legal for `player`.
    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(player).contains(action)
    }
}
