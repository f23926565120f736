//! Game tree search engine.

pub mod negamax;
pub mod search_context;
pub mod search_result;

use rand::Rng;

use crate::board::Board;
use crate::constants::DEFAULT_DEPTH;
use crate::eval::Evaluator;
use crate::ply_cache::PlyCache;
use crate::search::search_context::{SearchContext, SearchLimits};
use crate::search::search_result::SearchResult;
use crate::types::Depth;

/// Search parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Depth limit in plies.
    pub depth: Depth,
    /// Leaf evaluator. A mixed evaluator is resolved once per search, from
    /// the root position.
    pub evaluator: Evaluator,
    /// Optional time and node budget.
    pub limits: SearchLimits,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            depth: DEFAULT_DEPTH,
            evaluator: Evaluator::Absolute,
            limits: SearchLimits::default(),
        }
    }
}

/// Main search engine structure.
#[derive(Clone, Debug)]
pub struct Search {
    options: SearchOptions,
}

impl Search {
    /// Creates a new search engine.
    pub fn new(options: SearchOptions) -> Search {
        Search { options }
    }

    /// Searches `board` and picks a move for the side to move.
    ///
    /// # Arguments
    ///
    /// * `board` - Root position
    /// * `cache` - Ply cache of the current ply; the root's move list is
    ///   taken from level 0
    /// * `rng` - Randomness for choosing among equally scored moves
    ///
    /// # Returns
    ///
    /// The search result. `best_move` is `None` only for a depth-0 search.
    ///
    /// # Panics
    ///
    /// Panics if the depth is non-zero and the side to move has no legal move.
    pub fn run<R: Rng + ?Sized>(
        &self,
        board: &Board,
        cache: &mut PlyCache,
        rng: &mut R,
    ) -> SearchResult {
        let evaluator = self.options.evaluator.for_phase(board);
        let (hits, misses) = (cache.hits(), cache.misses());

        let mut ctx = SearchContext::new(evaluator, cache, self.options.limits);
        let result = negamax::search_root(&mut ctx, board, self.options.depth, rng);

        log::debug!(
            "search depth={} eval={} score={} nodes={} ties={} cache_hits={} cache_misses={}{}",
            result.depth,
            evaluator,
            result.score,
            result.n_nodes,
            result.best_moves.len(),
            cache.hits() - hits,
            cache.misses() - misses,
            if result.aborted { " (aborted)" } else { "" },
        );
        result
    }
}
