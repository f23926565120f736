//! Move generation over the frontier of a position.

use std::slice;

use arrayvec::ArrayVec;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::flip;
use crate::square::{BoardSize, Direction, Square};

/// A capturing direction of a move and the number of discs it flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capture {
    /// Direction of the run, seen from the move square.
    pub dir: Direction,
    /// Number of opponent discs in the run (at least 1).
    pub len: u8,
}

/// Represents a single legal move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// Every direction this move captures along. Never empty.
    pub captures: ArrayVec<Capture, 8>,
}

impl Move {
    /// Builds the move at `sq` if it is legal for the side to move.
    ///
    /// # Arguments
    ///
    /// * `board` - The current position
    /// * `sq` - Candidate square
    ///
    /// # Returns
    ///
    /// `Some(Move)` with all capturing directions, or `None` if `sq` is not a
    /// frontier cell or captures in no direction.
    pub fn at(board: &Board, sq: Square) -> Option<Move> {
        if !board.frontier.contains(sq) {
            return None;
        }

        let captures: ArrayVec<Capture, 8> = Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                flip::capture_length(board.size, board.player, board.opponent, sq, dir)
                    .map(|len| Capture { dir, len })
            })
            .collect();

        (!captures.is_empty()).then_some(Move { sq, captures })
    }

    /// Returns the total number of discs this move flips.
    #[inline]
    pub fn flip_count(&self) -> u32 {
        self.captures.iter().map(|c| c.len as u32).sum()
    }

    /// Returns the discs this move flips.
    #[inline]
    pub fn flipped(&self, size: BoardSize) -> Bitboard {
        flip::flipped(size, self.sq, &self.captures)
    }
}

/// Container for all legal moves in a position.
///
/// Moves are listed in ascending square order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Generates all legal moves for the current player.
    ///
    /// Only the board's frontier is examined; every direction of every
    /// candidate is measured so the list is ready for application.
    ///
    /// # Arguments
    ///
    /// * `board` - The current position
    ///
    /// # Returns
    ///
    /// A new MoveList containing all legal moves for the current player.
    pub fn new(board: &Board) -> MoveList {
        MoveList {
            moves: board
                .frontier
                .iter()
                .filter_map(|sq| Move::at(board, sq))
                .collect(),
        }
    }

    /// Returns the number of legal moves in this position.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the side to move has no legal move.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns the first move in the list, if any exists.
    #[inline]
    pub fn first(&self) -> Option<&Move> {
        self.moves.first()
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Finds the move placing a disc on `sq`.
    pub fn find(&self, sq: Square) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.sq == sq)
    }

    /// Returns the move squares as a bitboard.
    pub fn squares(&self) -> Bitboard {
        self.moves.iter().map(|mv| mv.sq).collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
