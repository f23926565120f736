//! Global constants

use crate::types::{Depth, Score};

/// Board size the positional weight tables are calibrated for.
pub const DEFAULT_SIZE: usize = 8;

/// Smallest playable board size.
pub const MIN_SIZE: usize = 4;

/// Largest board size that fits in a [`Bitboard`](crate::bitboard::Bitboard).
pub const MAX_SIZE: usize = 16;

/// Number of cells addressable by a bitboard.
pub const MAX_SQUARES: usize = MAX_SIZE * MAX_SIZE;

/// Default search depth limit for the search-based strategies.
pub const DEFAULT_DEPTH: Depth = 4;

/// Infinity score for search algorithms.
pub const SCORE_INF: Score = 1_000_000;

/// Stones on board below which the mixed evaluator plays positionally.
pub const OPENING_STONES: u32 = 20;

/// Stones on board below which the mixed evaluator plays for mobility.
pub const MIDGAME_STONES: u32 = 50;
