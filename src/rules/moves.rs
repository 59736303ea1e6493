//! Single-move validation and board mutation.
//!
//! A `Move` is built fresh for every move attempt. It holds an exclusive
//! borrow of the board for its (short) lifetime and runs in two phases:
//!
//! 1. `validate` reads the board and rejects illegal moves. Nothing is mutated.
//! 2. `move_stack` then `adjust_stack` perform the transfer and redistribute
//!    any overflow into the mover's reserve and captured counters.
//!
//! Callers run phase 1 to completion before starting phase 2, so a rejected
//! move leaves board and counters untouched.
//!
//! ## Overflow
//!
//! Capture happens only through overflow. When the destination stack grows
//! past `max_stack_height`, the excess is removed from the bottom. Removed
//! pieces of the mover's own colour go to the mover's reserve; the
//! opponent's go to the mover's captured count.

use tracing::debug;

use crate::core::{Board, FocusConfig, Origin, Piece, Player, PlayerId, PlayerMap, Square, Stack};
use crate::error::InvalidMove;

/// Pieces removed from the bottom of an overflowing stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overflow {
    /// Mover's own pieces returned to their reserve.
    pub reserved: u32,
    /// Opponent pieces added to the mover's captured count.
    pub captured: u32,
}

impl Overflow {
    /// Total pieces removed.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.reserved + self.captured
    }
}

/// One move attempt against a live board.
pub struct Move<'a> {
    mover: PlayerId,
    origin: Origin,
    destination: Square,
    count: usize,
    board: &'a mut Board,
    config: &'a FocusConfig,
    /// Origin stack height when the move was built (0 for reserve moves).
    origin_height: usize,
    /// Top of the origin stack when the move was built.
    top_piece: Option<Piece>,
}

impl<'a> Move<'a> {
    /// Build a move. Reads the origin stack but changes nothing.
    ///
    /// Reserve moves always carry exactly one piece; `count` is ignored for them.
    pub fn new(
        mover: PlayerId,
        origin: Origin,
        destination: Square,
        count: usize,
        board: &'a mut Board,
        config: &'a FocusConfig,
    ) -> Self {
        let (origin_height, top_piece, count) = match origin {
            Origin::Board(square) => (board.height(square), board.top(square), count),
            Origin::Reserve => (0, None, 1),
        };

        Self {
            mover,
            origin,
            destination,
            count,
            board,
            config,
            origin_height,
            top_piece,
        }
    }

    #[must_use]
    pub fn mover(&self) -> PlayerId {
        self.mover
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn destination(&self) -> Square {
        self.destination
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Check the move against the rules, short-circuiting on the first failure.
    ///
    /// The mover must already hold the turn. Checks, in order:
    /// piece count, ownership of the origin's top piece, direction, length.
    /// Reserve placements pass unconditionally; their precondition (a
    /// non-empty reserve) is the caller's to enforce.
    pub fn validate(&self, players: &PlayerMap<Player>) -> Result<(), InvalidMove> {
        let from = match self.origin {
            Origin::Board(square) => square,
            Origin::Reserve => return Ok(()),
        };

        self.validate_piece_count()?;
        self.validate_owner(from, players[self.mover].piece())?;
        self.validate_direction(from)?;
        self.validate_length(from)
    }

    fn validate_piece_count(&self) -> Result<(), InvalidMove> {
        let in_range = (1..=self.config.max_stack_height).contains(&self.count);
        if !in_range || self.count > self.origin_height {
            return Err(InvalidMove::WrongPieceCount {
                requested: self.count,
                available: self.origin_height,
            });
        }
        Ok(())
    }

    fn validate_owner(&self, from: Square, piece: Piece) -> Result<(), InvalidMove> {
        if self.top_piece != Some(piece) {
            return Err(InvalidMove::WrongOwner { origin: from });
        }
        Ok(())
    }

    // A null move passes here and is caught by the length check.
    fn validate_direction(&self, from: Square) -> Result<(), InvalidMove> {
        if !from.in_line_with(self.destination) {
            return Err(InvalidMove::DiagonalMove {
                from,
                to: self.destination,
            });
        }
        Ok(())
    }

    fn validate_length(&self, from: Square) -> Result<(), InvalidMove> {
        let distance = from.distance(self.destination);
        if distance != self.count {
            return Err(InvalidMove::WrongMoveLength {
                distance,
                count: self.count,
            });
        }
        Ok(())
    }

    /// Transfer pieces onto the destination stack.
    ///
    /// Board moves lift the top `count` pieces (relative order kept) off the
    /// origin, emptying it when the whole stack moves. Reserve moves add one
    /// of the mover's pieces.
    pub fn move_stack(&mut self, players: &PlayerMap<Player>) {
        match self.origin {
            Origin::Board(from) => {
                let origin = self.board.stack_mut(from);
                let keep = origin.len().saturating_sub(self.count);
                let lifted: Stack = origin.drain(keep..).collect();
                self.board.stack_mut(self.destination).extend(lifted);
            }
            Origin::Reserve => {
                let piece = players[self.mover].piece();
                self.board.stack_mut(self.destination).push(piece);
            }
        }
    }

    /// Trim the destination stack back to the height limit.
    ///
    /// Excess pieces are removed bottom first and credited to the mover.
    pub fn adjust_stack(&mut self, players: &mut PlayerMap<Player>) -> Overflow {
        let limit = self.config.max_stack_height;
        let stack = self.board.stack_mut(self.destination);
        if stack.len() <= limit {
            return Overflow::default();
        }

        let excess = stack.len() - limit;
        let removed: Stack = stack.drain(..excess).collect();

        let mover = &mut players[self.mover];
        let own = mover.piece();
        let mut overflow = Overflow::default();
        for piece in removed {
            if piece == own {
                mover.inc_reserve();
                overflow.reserved += 1;
            } else {
                mover.inc_captured();
                overflow.captured += 1;
            }
        }

        debug!(
            square = %self.destination,
            reserved = overflow.reserved,
            captured = overflow.captured,
            "stack overflow redistributed"
        );
        overflow
    }

    /// The player who has won, if any. The first player is checked first.
    #[must_use]
    pub fn check_win(&self, players: &PlayerMap<Player>) -> Option<PlayerId> {
        players.find(|p| self.config.is_winning_capture(p.captured()))
    }
}
