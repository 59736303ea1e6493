//! Move rules and the rules-engine trait.
//!
//! - `moves`: validation and execution of a single move (`Move`)
//! - `engine`: the `RulesEngine` trait games implement, and `MoveOutcome`

pub mod engine;
pub mod moves;

pub use engine::{MoveOutcome, RulesEngine};
pub use moves::{Move, Overflow};
