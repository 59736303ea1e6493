//! The 6x6 board of piece stacks.
//!
//! Each square holds a `Stack`: pieces ordered bottom to top, where the last
//! element is the top piece. Only the top piece decides who controls a stack.
//!
//! The grid is an `im::Vector` so cloning a board (for snapshots, or for
//! comparing before/after a rejected move) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Square, BOARD_SIZE};
use super::piece::Piece;

/// Pieces on one square, bottom first.
///
/// Inline capacity covers the transient worst case of a full stack landing on
/// another full stack before overflow is redistributed.
pub type Stack = SmallVec<[Piece; 10]>;

/// Row patterns of the starting layout, by owner: `true` = first player.
const EVEN_ROW: [bool; BOARD_SIZE] = [true, true, false, false, true, true];
const ODD_ROW: [bool; BOARD_SIZE] = [false, false, true, true, false, false];

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Stack>,
}

impl Board {
    /// Create a board with every square empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: (0..BOARD_SIZE * BOARD_SIZE).map(|_| Stack::new()).collect(),
        }
    }

    /// Create the standard starting layout.
    ///
    /// Every square holds one piece. Even rows read `[A, A, B, B, A, A]` and
    /// odd rows `[B, B, A, A, B, B]`, where `A` is `first` and `B` is `second`.
    #[must_use]
    pub fn starting(first: Piece, second: Piece) -> Self {
        let cells = Square::all()
            .map(|square| {
                let pattern = if square.row() % 2 == 0 { &EVEN_ROW } else { &ODD_ROW };
                let piece = if pattern[square.col()] { first } else { second };
                let mut stack = Stack::new();
                stack.push(piece);
                stack
            })
            .collect();

        Self { cells }
    }

    /// Replace the stack on a square, bottom first.
    #[must_use]
    pub fn with_stack(mut self, square: Square, pieces: &[Piece]) -> Self {
        *self.stack_mut(square) = Stack::from_slice(pieces);
        self
    }

    /// Get the stack on a square, bottom first.
    #[must_use]
    pub fn stack(&self, square: Square) -> &Stack {
        &self.cells[square.index()]
    }

    /// Get a mutable reference to the stack on a square.
    pub fn stack_mut(&mut self, square: Square) -> &mut Stack {
        &mut self.cells[square.index()]
    }

    /// Get the top piece on a square, if any.
    #[must_use]
    pub fn top(&self, square: Square) -> Option<Piece> {
        self.stack(square).last().copied()
    }

    /// Number of pieces on a square.
    #[must_use]
    pub fn height(&self, square: Square) -> usize {
        self.stack(square).len()
    }

    /// Iterate over `(Square, &Stack)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &Stack)> {
        Square::all().zip(self.cells.iter())
    }

    /// Count every piece with the given marker on the board.
    #[must_use]
    pub fn count_pieces(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .map(|stack| stack.iter().filter(|&&p| p == piece).count())
            .sum()
    }

    /// Tallest stack on the board.
    #[must_use]
    pub fn max_height(&self) -> usize {
        self.cells.iter().map(|stack| stack.len()).max().unwrap_or(0)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
