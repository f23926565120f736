//! Depth-limited negamax with alpha-beta pruning.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Score};

/// Searches the root position and samples one of the best moves.
///
/// Each root move is searched with a window whose lower bound sits just
/// below the best score found so far, so every move tied with the best gets
/// an exact score and joins `best_moves`. Moves that cannot reach the best
/// score are still cut off.
///
/// # Arguments
///
/// * `ctx` - Search context
/// * `board` - Root position
/// * `depth` - Depth limit in plies
/// * `rng` - Source of randomness for tie-breaking
///
/// # Panics
///
/// Panics if `depth > 0` and the side to move has no legal move.
pub fn search_root<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_>,
    board: &Board,
    depth: Depth,
    rng: &mut R,
) -> SearchResult {
    if depth == 0 {
        ctx.n_nodes += 1;
        return SearchResult::static_eval(ctx.evaluate(board, 0));
    }

    let moves = ctx.cache.moves(0, board);
    assert!(
        !moves.is_empty(),
        "search started on a position without legal moves"
    );
    ctx.n_nodes += 1;

    let mut best_score = -SCORE_INF;
    let mut best_moves = Vec::new();
    for mv in moves.iter() {
        let next = board.make_move(mv);
        let score = -negamax(ctx, &next, 1, depth - 1, -SCORE_INF, -(best_score - 1));

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv.sq);
        } else if score == best_score {
            best_moves.push(mv.sq);
        }
    }

    SearchResult {
        score: best_score,
        best_move: best_moves.choose(rng).copied(),
        best_moves,
        n_nodes: ctx.n_nodes,
        depth,
        aborted: ctx.is_aborted(),
    }
}

/// Fail-soft negamax over the subtree of `board`.
///
/// # Arguments
///
/// * `ctx` - Search context
/// * `board` - Position to search, seen from the side to move
/// * `level` - Distance from the root
/// * `depth` - Remaining depth
/// * `alpha` - Lower bound of the window
/// * `beta` - Upper bound of the window
///
/// # Returns
///
/// The exact score if it lies strictly inside `(alpha, beta)`, otherwise a
/// bound on the side the window was left.
pub fn negamax(
    ctx: &mut SearchContext<'_>,
    board: &Board,
    level: usize,
    depth: Depth,
    mut alpha: Score,
    beta: Score,
) -> Score {
    ctx.n_nodes += 1;

    if depth == 0 || !board.has_frontier() || ctx.budget_exceeded() {
        return ctx.evaluate(board, level);
    }

    // A forced pass is scored as a leaf rather than searched through.
    let moves = ctx.cache.moves(level, board);
    if moves.is_empty() {
        return ctx.evaluate(board, level);
    }

    let mut best_score = -SCORE_INF;
    for mv in moves.iter() {
        let next = board.make_move(mv);
        let score = -negamax(ctx, &next, level + 1, depth - 1, -beta, -alpha);

        if score > best_score {
            best_score = score;
            if score > alpha {
                alpha = score;
                if alpha >= beta {
                    break;
                }
            }
        }
    }

    best_score
}
