//! Board coordinates.
//!
//! ## Coord
//!
//! Raw `(row, column)` input as supplied by a caller. It may point anywhere,
//! including off the board; nothing indexes the board with a `Coord`.
//!
//! ## Square
//!
//! A coordinate proven to lie on the 6x6 board. The only way to get one is
//! `Square::new` / `Square::try_from(Coord)`, so board lookups by `Square`
//! never go out of bounds.
//!
//! ## Origin
//!
//! Where moved pieces come from: a board square or the mover's reserve.

use serde::{Deserialize, Serialize};

use crate::error::InvalidMove;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 6;

/// A raw `(row, column)` pair, 0-indexed, possibly off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check that both axes lie in `[0, BOARD_SIZE)`.
    #[must_use]
    pub fn is_on_board(self) -> bool {
        let range = 0..BOARD_SIZE as i32;
        range.contains(&self.row) && range.contains(&self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Square> for Coord {
    fn from(square: Square) -> Self {
        Self::new(i32::from(square.row), i32::from(square.col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A validated on-board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, or `None` if it would fall off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[must_use]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index into a flat board (0..36).
    #[must_use]
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Iterate over all squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Square {
                row: row as u8,
                col: col as u8,
            })
        })
    }

    /// Check whether two squares share a row or a column.
    ///
    /// A square is in line with itself.
    #[must_use]
    pub fn in_line_with(self, other: Square) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Straight-line distance along the axis that differs.
    ///
    /// Only meaningful for squares that are `in_line_with` each other.
    #[must_use]
    pub fn distance(self, other: Square) -> usize {
        if self.row == other.row {
            self.col.abs_diff(other.col) as usize
        } else {
            self.row.abs_diff(other.row) as usize
        }
    }

    /// Step `steps` squares in direction `(d_row, d_col)`, staying on the board.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32, steps: usize) -> Option<Square> {
        let steps = i32::try_from(steps).ok()?;
        let target = Coord::new(
            i32::from(self.row) + d_row * steps,
            i32::from(self.col) + d_col * steps,
        );
        Square::try_from(target).ok()
    }
}

impl TryFrom<Coord> for Square {
    type Error = InvalidMove;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        if coord.is_on_board() {
            Ok(Self {
                row: coord.row as u8,
                col: coord.col as u8,
            })
        } else {
            Err(InvalidMove::OutOfRange(coord))
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Source of the pieces in a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Pieces taken from the top of the stack on this square.
    Board(Square),
    /// A single piece placed from the mover's reserve.
    Reserve,
}
