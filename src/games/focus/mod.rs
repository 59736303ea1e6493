//! Focus (also sold as Domination).
//!
//! Two players on a 6x6 board move stacks of pieces along rows and columns:
//! - A stack is controlled by whoever owns its top piece
//! - Moving `n` pieces carries them exactly `n` squares, never diagonally
//! - Stacks taller than five lose pieces from the bottom: your own go to your
//!   reserve, your opponent's are captured
//! - Capturing more than five pieces wins

mod game;

pub use game::{FocusGame, FocusGameBuilder};
