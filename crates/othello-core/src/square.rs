//! Cells, directions and board geometry.
//!
//! Cells are addressed by `(x, y)` where `x` is the row and `y` the column,
//! both zero-based. A [`Square`] stores the row-major linear index
//! `x * size + y`, so converting between the two forms needs the board's
//! [`BoardSize`]:
//!
//! ```text
//! size 4:   a  b  c  d
//!        1  00 01 02 03
//!        2  04 05 06 07
//!        3  08 09 10 11
//!        4  12 13 14 15
//! ```

use std::fmt;

use crate::bitboard::Bitboard;
use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MAX_SQUARES};

/// A cell on the board, identified by its row-major linear index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u16);

impl Square {
    /// Creates a square from a linear index.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` does not fit in a bitboard.
    #[inline(always)]
    pub const fn new(index: usize) -> Square {
        debug_assert!(index < MAX_SQUARES);
        Square(index as u16)
    }

    /// Returns the linear index of the square.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns a bitboard with only this square set.
    #[inline(always)]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::from_square(self)
    }
}

/// One of the eight compass directions a capture run can follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Returns the `(dx, dy)` step of the direction, row first.
    #[inline(always)]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// The side length of a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardSize(u8);

impl Default for BoardSize {
    fn default() -> BoardSize {
        BoardSize::new(DEFAULT_SIZE)
    }
}

impl BoardSize {
    /// Creates a board size.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`].
    pub const fn new(size: usize) -> BoardSize {
        assert!(size <= MAX_SIZE, "board size exceeds MAX_SIZE");
        BoardSize(size as u8)
    }

    /// Returns the side length.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Returns the number of cells on the board.
    #[inline(always)]
    pub const fn cells(self) -> usize {
        self.get() * self.get()
    }

    /// Returns the square at row `x`, column `y`.
    #[inline(always)]
    pub fn square(self, x: usize, y: usize) -> Square {
        debug_assert!(x < self.get() && y < self.get(), "({x}, {y}) is off the board");
        Square::new(x * self.get() + y)
    }

    /// Returns the square at signed coordinates, or `None` when off the board.
    #[inline(always)]
    pub fn try_square(self, x: isize, y: isize) -> Option<Square> {
        let n = self.get() as isize;
        if (0..n).contains(&x) && (0..n).contains(&y) {
            Some(self.square(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Returns the `(row, column)` coordinates of a square.
    #[inline(always)]
    pub fn coords(self, sq: Square) -> (usize, usize) {
        (sq.index() / self.get(), sq.index() % self.get())
    }

    /// Steps one cell from `sq` in `dir`.
    ///
    /// # Returns
    ///
    /// The neighbouring square, or `None` when the step leaves the board.
    #[inline(always)]
    pub fn neighbor(self, sq: Square, dir: Direction) -> Option<Square> {
        let (x, y) = self.coords(sq);
        let (dx, dy) = dir.delta();
        self.try_square(x as isize + dx, y as isize + dy)
    }

    /// Iterates over the on-board neighbours of `sq`.
    pub fn neighbors(self, sq: Square) -> impl Iterator<Item = Square> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(sq, dir))
    }

    /// Iterates over every square in row-major order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.cells()).map(Square::new)
    }

    /// Returns a bitboard with every cell of the board set.
    #[inline(always)]
    pub fn mask(self) -> Bitboard {
        Bitboard::low_bits(self.cells())
    }

    /// Formats a square as a column letter followed by the 1-based row,
    /// e.g. `d3` for row 2, column 3.
    pub fn label(self, sq: Square) -> String {
        let (x, y) = self.coords(sq);
        format!("{}{}", (b'a' + y as u8) as char, x + 1)
    }

    /// Parses a label produced by [`BoardSize::label`] (case-insensitive).
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the label names a cell on this board, `None` otherwise.
    pub fn parse_square(self, label: &str) -> Option<Square> {
        let label = label.trim().to_ascii_lowercase();
        let mut chars = label.chars();
        let file = chars.next()?;
        if !file.is_ascii_lowercase() {
            return None;
        }
        let y = (file as u8 - b'a') as usize;
        let rank: usize = chars.as_str().parse().ok()?;
        if y >= self.get() || rank == 0 || rank > self.get() {
            return None;
        }
        Some(self.square(rank - 1, y))
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_coords_round_trip() {
        let size = BoardSize::new(8);
        let sq = size.square(2, 3);
        assert_eq!(sq.index(), 19);
        assert_eq!(size.coords(sq), (2, 3));
    }

    #[test]
    fn test_neighbor_bounds() {
        let size = BoardSize::new(4);
        let corner = size.square(0, 0);
        assert_eq!(size.neighbor(corner, Direction::North), None);
        assert_eq!(size.neighbor(corner, Direction::West), None);
        assert_eq!(
            size.neighbor(corner, Direction::SouthEast),
            Some(size.square(1, 1))
        );
        assert_eq!(size.neighbors(corner).count(), 3);
        assert_eq!(size.neighbors(size.square(1, 1)).count(), 8);
    }

    #[test]
    fn test_neighbor_does_not_wrap_rows() {
        let size = BoardSize::new(6);
        let end_of_row = size.square(1, 5);
        assert_eq!(size.neighbor(end_of_row, Direction::East), None);
        assert_eq!(size.neighbor(end_of_row, Direction::NorthEast), None);
    }

    #[test]
    fn test_label_and_parse() {
        let size = BoardSize::new(8);
        let sq = size.square(2, 3);
        assert_eq!(size.label(sq), "d3");
        assert_eq!(size.parse_square("d3"), Some(sq));
        assert_eq!(size.parse_square(" D3 "), Some(sq));
        assert_eq!(size.parse_square("h8"), Some(size.square(7, 7)));
        assert_eq!(size.parse_square("i1"), None);
        assert_eq!(size.parse_square("a0"), None);
        assert_eq!(size.parse_square("a9"), None);
        assert_eq!(size.parse_square("pass"), None);
        assert_eq!(size.parse_square(""), None);
    }

    #[test]
    fn test_mask_counts_cells() {
        assert_eq!(BoardSize::new(4).mask().count(), 16);
        assert_eq!(BoardSize::new(8).mask().count(), 64);
        assert_eq!(BoardSize::new(16).mask().count(), 256);
    }

    #[test]
    #[should_panic]
    fn test_oversized_board_panics() {
        BoardSize::new(MAX_SIZE + 1);
    }
}
