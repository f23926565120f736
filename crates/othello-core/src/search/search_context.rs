//! Search context for maintaining state during game tree search.

use std::time::{Duration, Instant};

use crate::board::Board;
use crate::eval::Evaluator;
use crate::ply_cache::PlyCache;
use crate::types::Score;

/// Optional per-search budget.
///
/// Once exhausted, every node still to be expanded is scored statically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Wall-clock time allowed for one search.
    pub time_limit: Option<Duration>,
    /// Maximum number of nodes visited by one search.
    pub max_nodes: Option<u64>,
}

/// The search context that maintains all state during search operations.
pub struct SearchContext<'a> {
    /// Number of nodes searched in this context
    pub n_nodes: u64,
    /// Evaluator for leaf positions, already resolved for the root phase
    pub evaluator: Evaluator,
    /// Move lists memoized per level for the current ply
    pub cache: &'a mut PlyCache,
    deadline: Option<Instant>,
    max_nodes: Option<u64>,
    aborted: bool,
}

impl<'a> SearchContext<'a> {
    /// Creates a new search context; the time budget starts now.
    ///
    /// # Arguments
    /// * `evaluator` - Evaluator for leaf positions.
    /// * `cache` - Ply cache shared with the game loop.
    /// * `limits` - Search budget.
    pub fn new(evaluator: Evaluator, cache: &'a mut PlyCache, limits: SearchLimits) -> Self {
        SearchContext {
            n_nodes: 0,
            evaluator,
            cache,
            deadline: limits.time_limit.map(|t| Instant::now() + t),
            max_nodes: limits.max_nodes,
            aborted: false,
        }
    }

    /// Scores `board`, reached at `level`, with the context's evaluator.
    #[inline]
    pub fn evaluate(&mut self, board: &Board, level: usize) -> Score {
        self.evaluator.evaluate_with(board, self.cache, level)
    }

    /// Checks the budget. Once exceeded, stays exceeded.
    #[inline]
    pub fn budget_exceeded(&mut self) -> bool {
        if !self.aborted {
            let out_of_nodes = self.max_nodes.is_some_and(|max| self.n_nodes >= max);
            let out_of_time = self.deadline.is_some_and(|d| Instant::now() >= d);
            self.aborted = out_of_nodes || out_of_time;
        }
        self.aborted
    }

    /// Returns whether the budget ran out during the search.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}
