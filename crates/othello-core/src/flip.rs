//! Capture runs and disc flip calculation for move execution.

use std::iter;

use crate::bitboard::Bitboard;
use crate::move_list::Capture;
use crate::square::{BoardSize, Direction, Square};

/// Iterates over the squares strictly beyond `sq` in `dir`, up to the board edge.
#[inline]
pub fn ray(size: BoardSize, sq: Square, dir: Direction) -> impl Iterator<Item = Square> {
    iter::successors(size.neighbor(sq, dir), move |&cur| size.neighbor(cur, dir))
}

/// Measures the capture run starting next to `sq` in `dir`.
///
/// The walk steps over contiguous opponent discs; the direction captures iff
/// the run is non-empty and ends, still on the board, on one of the player's
/// discs.
///
/// # Arguments
///
/// * `size` - Board geometry
/// * `p` - Bitboard representing the current player's discs
/// * `o` - Bitboard representing the opponent's discs
/// * `sq` - The (empty) square the disc would be placed on
/// * `dir` - Direction to walk
///
/// # Returns
///
/// `Some(n)` with the number of opponent discs the direction would flip, or
/// `None` if the direction does not capture.
#[inline]
pub fn capture_length(
    size: BoardSize,
    p: Bitboard,
    o: Bitboard,
    sq: Square,
    dir: Direction,
) -> Option<u8> {
    let mut run = 0;
    for cur in ray(size, sq, dir) {
        if o.contains(cur) {
            run += 1;
            continue;
        }
        return (run > 0 && p.contains(cur)).then_some(run);
    }
    None
}

/// Collects the discs flipped by placing a disc at `sq` with the given captures.
///
/// Every capture is applied, so a move that captures along several
/// directions flips all of them.
///
/// # Returns
///
/// A bitboard of the opponent discs that change colour.
#[inline]
pub fn flipped(size: BoardSize, sq: Square, captures: &[Capture]) -> Bitboard {
    captures
        .iter()
        .flat_map(|cap| ray(size, sq, cap.dir).take(cap.len as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::disc::Disc;

    #[test]
    fn test_capture_length_initial_position() {
        let board = Board::new(BoardSize::new(8));
        let size = board.size;
        let d3 = size.parse_square("d3").unwrap();

        assert_eq!(
            capture_length(size, board.player, board.opponent, d3, Direction::South),
            Some(1)
        );
        assert_eq!(
            capture_length(size, board.player, board.opponent, d3, Direction::East),
            None
        );
    }

    #[test]
    fn test_capture_requires_closing_disc() {
        // A run of white discs running into the edge captures nothing.
        let board = Board::from_string("-OOO------------", BoardSize::new(4), Disc::Black);
        let a1 = board.size.square(0, 0);
        assert_eq!(
            capture_length(board.size, board.player, board.opponent, a1, Direction::East),
            None
        );

        let board = Board::from_string("-OOX------------", BoardSize::new(4), Disc::Black);
        assert_eq!(
            capture_length(board.size, board.player, board.opponent, a1, Direction::East),
            Some(2)
        );
    }

    #[test]
    fn test_flipped_multiple_directions() {
        let board = Board::from_string(
            "-OX-\
             OO--\
             X-X-\
             ----",
            BoardSize::new(4),
            Disc::Black,
        );
        let size = board.size;
        let sq = size.square(0, 0);
        let captures: Vec<Capture> = Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                capture_length(size, board.player, board.opponent, sq, dir)
                    .map(|len| Capture { dir, len })
            })
            .collect();

        let flipped = flipped(size, sq, &captures);
        assert_eq!(captures.len(), 3);
        assert_eq!(flipped.count(), 3);
        assert!(flipped.contains(size.square(0, 1)));
        assert!(flipped.contains(size.square(1, 0)));
        assert!(flipped.contains(size.square(1, 1)));
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let size = BoardSize::new(6);
        let squares: Vec<Square> = ray(size, size.square(2, 3), Direction::East).collect();
        assert_eq!(squares, vec![size.square(2, 4), size.square(2, 5)]);
        assert_eq!(ray(size, size.square(0, 0), Direction::North).count(), 0);
    }
}
