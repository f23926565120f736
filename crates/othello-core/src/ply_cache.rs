//! Per-ply scratch memo of generated moves.
//!
//! The cache maps a search level to the move lists already generated for
//! positions seen at that level, keyed by the exact `(player, opponent)`
//! pair. It lives for one ply of the game: the game loop clears it as soon as
//! a move is played or a pass is detected, so nothing is reused across plies.

use std::rc::Rc;

use rapidhash::fast::RapidHashMap;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::move_list::MoveList;

type Key = (Bitboard, Bitboard);

/// Scratch cache of move lists, one table per search level.
#[derive(Debug, Default)]
pub struct PlyCache {
    levels: Vec<RapidHashMap<Key, Rc<MoveList>>>,
    hits: u64,
    misses: u64,
}

impl PlyCache {
    /// Creates an empty cache.
    pub fn new() -> PlyCache {
        PlyCache::default()
    }

    /// Returns the legal moves of `board`, generating them on a miss.
    ///
    /// # Arguments
    ///
    /// * `level` - Search level the position is reached at (0 = root)
    /// * `board` - Position to generate moves for
    ///
    /// # Returns
    ///
    /// A shared handle to the move list, valid after the cache is cleared.
    pub fn moves(&mut self, level: usize, board: &Board) -> Rc<MoveList> {
        if self.levels.len() <= level {
            self.levels.resize_with(level + 1, RapidHashMap::default);
        }

        let table = &mut self.levels[level];
        let key = (board.player, board.opponent);
        if let Some(list) = table.get(&key) {
            self.hits += 1;
            return Rc::clone(list);
        }

        self.misses += 1;
        let list = Rc::new(MoveList::new(board));
        table.insert(key, Rc::clone(&list));
        list
    }

    /// Drops every entry at every level. Table allocations are kept.
    pub fn clear(&mut self) {
        let entries = self.len();
        self.levels.iter_mut().for_each(RapidHashMap::clear);
        log::trace!("ply cache cleared ({entries} entries)");
    }

    /// Returns the number of cached positions over all levels.
    pub fn len(&self) -> usize {
        self.levels.iter().map(RapidHashMap::len).sum()
    }

    /// Returns `true` if no position is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to generate moves.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
