//! Game configuration.
//!
//! `FocusConfig` carries the numeric rules a game is played with. The
//! defaults are the standard Focus rules; `validate()` rejects settings the
//! move rules cannot honor.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::coord::BOARD_SIZE;

/// Rule parameters for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Tallest stack allowed after a move (default: 5).
    ///
    /// Pieces beyond this are removed from the bottom of the stack. Also the
    /// most pieces a single move may carry.
    pub max_stack_height: usize,

    /// Captures needed to win, exclusive (default: 5).
    ///
    /// A player wins once their captured count is strictly greater.
    pub capture_goal: u32,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            max_stack_height: 5,
            capture_goal: 5,
        }
    }
}

impl FocusConfig {
    /// Set the stack height limit.
    #[must_use]
    pub fn with_max_stack_height(mut self, height: usize) -> Self {
        self.max_stack_height = height;
        self
    }

    /// Set the capture goal.
    #[must_use]
    pub fn with_capture_goal(mut self, goal: u32) -> Self {
        self.capture_goal = goal;
        self
    }

    /// Check whether `captured` pieces wins the game.
    #[must_use]
    pub fn is_winning_capture(&self, captured: u32) -> bool {
        captured > self.capture_goal
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_stack_height == 0 {
            return Err(ConfigError::Validation(
                "max_stack_height must be > 0".into(),
            ));
        }
        // A move travels as many squares as it carries pieces.
        if self.max_stack_height >= BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "max_stack_height must be < {}",
                BOARD_SIZE
            )));
        }
        Ok(())
    }
}
