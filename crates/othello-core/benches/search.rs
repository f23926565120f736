use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::board::Board;
use othello_core::eval::{Evaluator, Table};
use othello_core::move_list::MoveList;
use othello_core::ply_cache::PlyCache;
use othello_core::search::{Search, SearchOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn midgame_board() -> Board {
    // Deterministic line: always the last generated move.
    let mut board = Board::default();
    for _ in 0..12 {
        let moves = MoveList::new(&board);
        board = match moves.iter().last() {
            Some(mv) => board.make_move(mv),
            None => board.switch_players(),
        };
    }
    board
}

fn bench_move_list(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("move_list_new", |b| {
        b.iter(|| MoveList::new(black_box(&board)))
    });
    c.bench_function("board_get_moves", |b| {
        b.iter(|| black_box(&board).get_moves())
    });
}

fn bench_search(c: &mut Criterion) {
    let board = midgame_board();
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    for evaluator in [
        Evaluator::Absolute,
        Evaluator::Positional(Table::A),
        Evaluator::Mobility,
    ] {
        let search = Search::new(SearchOptions {
            depth: 5,
            evaluator,
            ..Default::default()
        });
        group.bench_with_input(
            BenchmarkId::from_parameter(evaluator),
            &search,
            |b, search| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| {
                    let mut cache = PlyCache::new();
                    black_box(search.run(&board, &mut cache, &mut rng))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_move_list, bench_search);
criterion_main!(benches);
