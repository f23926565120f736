use std::collections::HashSet;

use othello_core::board::Board;
use othello_core::eval::{Evaluator, Table};
use othello_core::move_list::MoveList;
use othello_core::ply_cache::PlyCache;
use othello_core::search::search_result::SearchResult;
use othello_core::search::{Search, SearchOptions};
use othello_core::square::{BoardSize, Square};
use othello_core::types::{Depth, Score};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Plain negamax without pruning, with the same leaf rules as the engine.
fn minimax(board: &Board, depth: Depth, evaluator: Evaluator) -> (Score, u64) {
    if depth == 0 || !board.has_frontier() {
        return (evaluator.evaluate(board), 1);
    }
    let moves = MoveList::new(board);
    if moves.is_empty() {
        return (evaluator.evaluate(board), 1);
    }

    let mut nodes = 1;
    let mut best = Score::MIN;
    for mv in &moves {
        let (score, n) = minimax(&board.make_move(mv), depth - 1, evaluator);
        nodes += n;
        best = best.max(-score);
    }
    (best, nodes)
}

/// Scores every root move without pruning and returns the best score, the
/// moves achieving it and the node count.
fn reference_root(
    board: &Board,
    depth: Depth,
    evaluator: Evaluator,
) -> (Score, HashSet<Square>, u64) {
    let evaluator = evaluator.for_phase(board);
    let mut nodes = 1;
    let scored: Vec<(Square, Score)> = MoveList::new(board)
        .iter()
        .map(|mv| {
            let (score, n) = minimax(&board.make_move(mv), depth - 1, evaluator);
            nodes += n;
            (mv.sq, -score)
        })
        .collect();

    let best = scored.iter().map(|&(_, s)| s).max().unwrap();
    let best_moves = scored
        .iter()
        .filter(|&&(_, s)| s == best)
        .map(|&(sq, _)| sq)
        .collect();
    (best, best_moves, nodes)
}

/// Random playout of `plies` plies from the start position. Returns `None`
/// if the game ends or the side to move has to pass at the end.
fn random_position(size: BoardSize, plies: usize, rng: &mut StdRng) -> Option<Board> {
    let mut board = Board::new(size);
    for _ in 0..plies {
        let moves = MoveList::new(&board);
        board = match moves.iter().collect::<Vec<_>>().choose(rng) {
            Some(mv) => board.make_move(mv),
            None if board.is_game_over() => return None,
            None => board.switch_players(),
        };
    }
    board.has_legal_moves().then_some(board)
}

fn run(board: &Board, depth: Depth, evaluator: Evaluator, seed: u64) -> SearchResult {
    let search = Search::new(SearchOptions {
        depth,
        evaluator,
        ..Default::default()
    });
    let mut cache = PlyCache::new();
    search.run(board, &mut cache, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(2024);
    let evaluators = [
        Evaluator::Absolute,
        Evaluator::Positional(Table::A),
        Evaluator::Positional(Table::B),
        Evaluator::Mobility,
        Evaluator::Mixed(Table::A),
        Evaluator::Mixed(Table::B),
    ];

    let mut pruned_nodes = 0;
    let mut full_nodes = 0;
    let mut checked = 0;
    while checked < 40 {
        let plies = rng.random_range(0..56);
        let Some(board) = random_position(BoardSize::default(), plies, &mut rng) else {
            continue;
        };
        let evaluator = *evaluators.choose(&mut rng).unwrap();
        let depth = rng.random_range(1..=4);

        let result = run(&board, depth, evaluator, checked);
        let (score, best_moves, nodes) = reference_root(&board, depth, evaluator);

        assert_eq!(result.score, score, "{evaluator} depth {depth}\n{board}");
        assert_eq!(
            result.best_moves.iter().copied().collect::<HashSet<_>>(),
            best_moves,
            "{evaluator} depth {depth}\n{board}"
        );
        assert!(best_moves.contains(&result.best_move.unwrap()));
        assert!(result.n_nodes <= nodes);

        pruned_nodes += result.n_nodes;
        full_nodes += nodes;
        checked += 1;
    }
    assert!(pruned_nodes < full_nodes);
}

#[test]
fn test_alpha_beta_matches_minimax_on_small_boards() {
    let mut rng = StdRng::seed_from_u64(7);
    for size in [4, 6, 10] {
        let size = BoardSize::new(size);
        for plies in 0..8 {
            let Some(board) = random_position(size, plies, &mut rng) else {
                continue;
            };
            for evaluator in [Evaluator::Absolute, Evaluator::Mobility] {
                let result = run(&board, 3, evaluator, plies as u64);
                let (score, best_moves, _) = reference_root(&board, 3, evaluator);
                assert_eq!(result.score, score);
                assert_eq!(
                    result.best_moves.iter().copied().collect::<HashSet<_>>(),
                    best_moves
                );
            }
        }
    }
}

#[test]
fn test_depth_zero_returns_static_eval() {
    let mut rng = StdRng::seed_from_u64(99);
    for plies in [0, 10, 30] {
        let Some(board) = random_position(BoardSize::default(), plies, &mut rng) else {
            continue;
        };
        for evaluator in [
            Evaluator::Absolute,
            Evaluator::Positional(Table::A),
            Evaluator::Mobility,
        ] {
            let result = run(&board, 0, evaluator, 0);
            assert_eq!(result.score, evaluator.evaluate(&board));
            assert_eq!(result.n_nodes, 1);
            assert!(result.best_move.is_none());
        }
    }
}

#[test]
fn test_ties_are_sampled_uniformly() {
    // All four opening moves are equivalent by symmetry.
    let board = Board::default();
    let mut seen = HashSet::new();
    for seed in 0..200 {
        let result = run(&board, 3, Evaluator::Absolute, seed);
        assert_eq!(result.best_moves.len(), 4);
        seen.insert(result.best_move.unwrap());
    }
    let expected: HashSet<Square> = MoveList::new(&board).iter().map(|mv| mv.sq).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_same_seed_same_move() {
    let board = Board::default();
    let a = run(&board, 4, Evaluator::Mobility, 12345);
    let b = run(&board, 4, Evaluator::Mobility, 12345);
    assert_eq!(a, b);
}
