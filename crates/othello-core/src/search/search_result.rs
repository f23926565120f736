//! Search result types.

use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Score of the root position from the side to move's perspective.
    pub score: Score,
    /// Move sampled uniformly from `best_moves`, `None` for a depth-0 search.
    pub best_move: Option<Square>,
    /// Every root move whose exact score equals `score`, in generation order.
    pub best_moves: Vec<Square>,
    /// Number of nodes visited, the root included.
    pub n_nodes: u64,
    /// Depth limit the search ran with.
    pub depth: Depth,
    /// Whether the search budget ran out before the tree was exhausted.
    pub aborted: bool,
}

impl SearchResult {
    /// Creates the result of a search that did not expand the root.
    pub fn static_eval(score: Score) -> Self {
        SearchResult {
            score,
            best_move: None,
            best_moves: vec![],
            n_nodes: 1,
            depth: 0,
            aborted: false,
        }
    }
}
