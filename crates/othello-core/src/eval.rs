//! Static position evaluation.
//!
//! Every evaluator scores a position from the perspective of the side to
//! move: positive values favour `board.player`.
//!
//! - [`Evaluator::Absolute`]: disc difference.
//! - [`Evaluator::Positional`]: weighted sum over a fixed 8x8 table.
//! - [`Evaluator::Mobility`]: legal move count difference.
//! - [`Evaluator::Mixed`]: positional in the opening, mobility in the
//!   midgame, absolute in the endgame, chosen by stones on the board.

pub mod tables;

use std::fmt;

use crate::board::Board;
use crate::constants::{DEFAULT_SIZE, MIDGAME_STONES, OPENING_STONES};
use crate::ply_cache::PlyCache;
use crate::types::Score;
use tables::{TABLE_A, TABLE_B, WeightTable};

/// Selects one of the shipped weight tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    A,
    B,
}

impl Table {
    /// Returns the weights of the table.
    #[inline]
    pub fn weights(self) -> &'static WeightTable {
        match self {
            Table::A => &TABLE_A,
            Table::B => &TABLE_B,
        }
    }
}

/// Game phase used by the mixed evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

impl Phase {
    /// Classifies a position by the number of stones on the board.
    #[inline]
    pub fn of(board: &Board) -> Phase {
        match board.get_disc_count() {
            n if n < OPENING_STONES => Phase::Opening,
            n if n < MIDGAME_STONES => Phase::Midgame,
            _ => Phase::Endgame,
        }
    }
}

/// Static evaluation function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Evaluator {
    Absolute,
    Positional(Table),
    Mobility,
    Mixed(Table),
}

impl Evaluator {
    /// Evaluates `board` from the side to move's perspective.
    ///
    /// Mobility is computed from legal-move bitboards; see
    /// [`Evaluator::evaluate_with`] for the cached variant used in search.
    pub fn evaluate(&self, board: &Board) -> Score {
        match self {
            Evaluator::Absolute => absolute(board),
            Evaluator::Positional(table) => positional(table.weights(), board),
            Evaluator::Mobility => {
                let own = board.get_moves().count() as Score;
                let theirs = board.switch_players().get_moves().count() as Score;
                own - theirs
            }
            Evaluator::Mixed(_) => self.for_phase(board).evaluate(board),
        }
    }

    /// Evaluates `board`, taking move lists from `cache` at `level`.
    ///
    /// Returns the same score as [`Evaluator::evaluate`].
    pub fn evaluate_with(&self, board: &Board, cache: &mut PlyCache, level: usize) -> Score {
        match self {
            Evaluator::Mobility => {
                let own = cache.moves(level, board).count() as Score;
                let theirs = cache.moves(level, &board.switch_players()).count() as Score;
                own - theirs
            }
            Evaluator::Mixed(_) => self.for_phase(board).evaluate_with(board, cache, level),
            _ => self.evaluate(board),
        }
    }

    /// Resolves a mixed evaluator to the evaluator for the phase of `board`.
    ///
    /// Non-mixed evaluators are returned unchanged.
    pub fn for_phase(&self, board: &Board) -> Evaluator {
        match *self {
            Evaluator::Mixed(table) => match Phase::of(board) {
                Phase::Opening => Evaluator::Positional(table),
                Phase::Midgame => Evaluator::Mobility,
                Phase::Endgame => Evaluator::Absolute,
            },
            other => other,
        }
    }

    /// Returns `true` if the evaluator uses a weight table, which only fits
    /// the default board size.
    pub fn requires_default_size(&self) -> bool {
        matches!(self, Evaluator::Positional(_) | Evaluator::Mixed(_))
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Absolute => write!(f, "absolute"),
            Evaluator::Positional(table) => write!(f, "positional({table:?})"),
            Evaluator::Mobility => write!(f, "mobility"),
            Evaluator::Mixed(table) => write!(f, "mixed({table:?})"),
        }
    }
}

#[inline]
fn absolute(board: &Board) -> Score {
    board.get_player_count() as Score - board.get_opponent_count() as Score
}

fn positional(weights: &WeightTable, board: &Board) -> Score {
    assert_eq!(
        board.size.get(),
        DEFAULT_SIZE,
        "positional weights only cover {DEFAULT_SIZE}x{DEFAULT_SIZE} boards"
    );
    let weight = |sq| {
        let (x, y) = board.size.coords(sq);
        weights[x][y]
    };
    board.player.iter().map(weight).sum::<Score>() - board.opponent.iter().map(weight).sum::<Score>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::square::BoardSize;

    fn board8(s: &str) -> Board {
        Board::from_string(s, BoardSize::new(8), Disc::Black)
    }

    #[test]
    fn test_absolute() {
        let board = Board::default();
        assert_eq!(Evaluator::Absolute.evaluate(&board), 0);

        let next = board.try_make_move(board.size.parse_square("d3").unwrap()).unwrap();
        // White to move, 1 disc against 4
        assert_eq!(Evaluator::Absolute.evaluate(&next), -3);
    }

    #[test]
    fn test_positional() {
        let board = board8(
            "X------O\
             --------\
             --------\
             ---OX---\
             ---XO---\
             --------\
             -O------\
             --------",
        );
        // Corners cancel out, centre cells cancel out, b7 is an X-square for White
        assert_eq!(Evaluator::Positional(Table::A).evaluate(&board), 50);
        assert_eq!(Evaluator::Positional(Table::B).evaluate(&board), 4);
    }

    #[test]
    fn test_mobility() {
        let board = Board::default();
        assert_eq!(Evaluator::Mobility.evaluate(&board), 0);

        let next = board.try_make_move(board.size.parse_square("d3").unwrap()).unwrap();
        // White replies: c3, e3, c5
        let own = next.get_moves().count() as Score;
        let theirs = next.switch_players().get_moves().count() as Score;
        assert_eq!(Evaluator::Mobility.evaluate(&next), own - theirs);
        assert_eq!(own, 3);
    }

    #[test]
    fn test_evaluate_with_matches_evaluate() {
        let mut cache = PlyCache::new();
        let mut board = Board::default();
        for label in ["d3", "c5", "f6"] {
            board = board.try_make_move(board.size.parse_square(label).unwrap()).unwrap();
            for evaluator in [
                Evaluator::Absolute,
                Evaluator::Positional(Table::A),
                Evaluator::Mobility,
                Evaluator::Mixed(Table::B),
            ] {
                assert_eq!(
                    evaluator.evaluate_with(&board, &mut cache, 2),
                    evaluator.evaluate(&board),
                    "{evaluator} after {label}"
                );
            }
        }
    }

    #[test]
    fn test_mixed_phase_boundaries() {
        let size = BoardSize::new(8);
        let filled = |n: usize| {
            let player = size.squares().take(n).filter(|sq| sq.index() % 2 == 0).collect();
            let opponent = size.squares().take(n).filter(|sq| sq.index() % 2 == 1).collect();
            Board::from_bitboards(player, opponent, size)
        };
        let mixed = Evaluator::Mixed(Table::A);

        for (stones, expected) in [
            (4, Evaluator::Positional(Table::A)),
            (19, Evaluator::Positional(Table::A)),
            (20, Evaluator::Mobility),
            (49, Evaluator::Mobility),
            (50, Evaluator::Absolute),
            (64, Evaluator::Absolute),
        ] {
            let board = filled(stones);
            assert_eq!(mixed.for_phase(&board), expected, "{stones} stones");
            assert_eq!(mixed.evaluate(&board), expected.evaluate(&board));
        }
    }

    #[test]
    fn test_for_phase_keeps_plain_evaluators() {
        let board = Board::default();
        assert_eq!(Evaluator::Mobility.for_phase(&board), Evaluator::Mobility);
        assert!(!Evaluator::Absolute.requires_default_size());
        assert!(Evaluator::Mixed(Table::B).requires_default_size());
    }
}
