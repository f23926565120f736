//! Bitboard operations and types.
//!
//! This module provides a [`Bitboard`] type that represents one player's stones
//! as a fixed-width bit set, where bit `i` corresponds to the cell with linear
//! index `i` (see [`Square`]). Four 64-bit words give room for boards up to
//! 16x16; smaller boards simply leave the upper bits clear.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::constants::MAX_SQUARES;
use crate::square::Square;

/// Number of 64-bit words backing a bitboard.
const WORDS: usize = MAX_SQUARES / 64;

/// Fixed-width bit set with one bit per cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard([u64; WORDS]);

impl Bitboard {
    /// The empty bitboard.
    pub const EMPTY: Bitboard = Bitboard([0; WORDS]);

    /// Creates a bitboard with a single bit set at the given square.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with only the specified square's bit set.
    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        let mut words = [0; WORDS];
        words[sq.index() / 64] = 1 << (sq.index() % 64);
        Bitboard(words)
    }

    /// Creates a bitboard with the lowest `n` bits set.
    ///
    /// # Arguments
    ///
    /// * `n` - Number of bits to set, at most [`MAX_SQUARES`].
    #[inline]
    pub fn low_bits(n: usize) -> Self {
        debug_assert!(n <= MAX_SQUARES);
        let mut words = [0; WORDS];
        for (w, word) in words.iter_mut().enumerate() {
            let lo = w * 64;
            if n >= lo + 64 {
                *word = u64::MAX;
            } else if n > lo {
                *word = (1 << (n - lo)) - 1;
            }
        }
        Bitboard(words)
    }

    /// Returns a new bitboard with the bit at the given square set.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        self | Bitboard::from_square(sq)
    }

    /// Returns a new bitboard with the bit at the given square removed.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to clear.
    ///
    /// # Returns
    ///
    /// A new `Bitboard` with the specified square's bit cleared.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        self & !Bitboard::from_square(sq)
    }

    /// Checks if the bitboard contains the bit at the given square.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to check.
    ///
    /// # Returns
    ///
    /// `true` if the specified square's bit is set, `false` otherwise.
    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        self.0[sq.index() / 64] & (1 << (sq.index() % 64)) != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub fn is_empty(self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Returns the number of set bits (population count).
    #[inline(always)]
    pub fn count(self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    /// Returns the square corresponding to the least significant set bit.
    ///
    /// # Returns
    ///
    /// `Some(Square)` for the LSB position, or `None` if the bitboard is empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        self.0
            .iter()
            .enumerate()
            .find(|&(_, &w)| w != 0)
            .map(|(i, w)| Square::new(i * 64 + w.trailing_zeros() as usize))
    }

    /// Removes and returns the least significant set bit as a square,
    /// along with the updated bitboard.
    ///
    /// # Returns
    ///
    /// `None` if the bitboard is empty, otherwise the LSB square and the
    /// bitboard with that bit cleared.
    #[inline(always)]
    pub fn pop_lsb(self) -> Option<(Square, Self)> {
        let sq = self.lsb_square()?;
        Some((sq, self.remove(sq)))
    }

    /// Returns an iterator over all set squares in the bitboard.
    ///
    /// # Returns
    ///
    /// A [`BitboardIterator`] that yields each set square in ascending index order.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(std::array::from_fn(|i| self.0[i] & rhs.0[i]))
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(std::array::from_fn(|i| self.0[i] | rhs.0[i]))
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(std::array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(self.0.map(|w| !w))
    }
}

impl BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::set)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for w in self.0.iter().rev() {
            write!(f, "{w:016x}")?;
        }
        Ok(())
    }
}

/// Iterator over the set squares of a [`Bitboard`].
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    /// Creates a new `BitboardIterator`.
    ///
    /// # Arguments
    ///
    /// * `bitboard` - The bitboard to iterate over.
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let (square, rest) = self.bitboard.pop_lsb()?;
        self.bitboard = rest;
        Some(square)
    }
}
