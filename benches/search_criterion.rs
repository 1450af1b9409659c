use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use array_chess::game_state::game_state::GameState;
use array_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use array_chess::search::board_scoring::{MaterialMobilityScorer, ScoringPerspective};
use array_chess::search::negamax::{find_best_move, find_best_move_full_width, SearchConfig};

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    (
        "italian",
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    ),
];

fn bench_search(c: &mut Criterion) {
    let depth: u8 = match std::env::var("ARRAY_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 4,
        _ => 3,
    };

    let mut group = c.benchmark_group(format!("negamax_d{depth}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let generator = PseudoLegalMoveGenerator;
    let scorer = MaterialMobilityScorer::new(ScoringPerspective::SideToMove);
    let config = SearchConfig { depth };

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");

        let mut check = game.clone();
        let pruned = find_best_move(&mut check, &generator, &scorer, config);
        let full = find_best_move_full_width(&mut check, &generator, &scorer, config);
        assert_eq!(pruned.best_move, full.best_move, "pruning changed the move for {name}");
        assert_eq!(pruned.best_score, full.best_score, "pruning changed the score for {name}");

        group.bench_with_input(BenchmarkId::new("alpha_beta", name), &game, |b, game| {
            let mut board = game.clone();
            b.iter(|| black_box(find_best_move(&mut board, &generator, &scorer, black_box(config))));
        });
        group.bench_with_input(BenchmarkId::new("full_width", name), &game, |b, game| {
            let mut board = game.clone();
            b.iter(|| {
                black_box(find_best_move_full_width(
                    &mut board,
                    &generator,
                    &scorer,
                    black_box(config),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
