//! Pruned versus full-width search baseline.
//!
//! Usage:
//! `cargo run --release --bin search_baseline`
//! `cargo run --release --bin search_baseline -- --depth 4 --evaluation absolute`

use array_chess::chess_errors::ChessError;
use array_chess::game_state::game_state::GameState;
use array_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use array_chess::search::board_scoring::{MaterialMobilityScorer, ScoringPerspective};
use array_chess::search::negamax::{find_best_move, find_best_move_full_width, SearchConfig};

fn arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    arg_value(flag)
        .and_then(|v| v.parse::<u8>().ok())
        .map(|v| v.max(1))
        .unwrap_or(default)
}

fn run_case(
    name: &str,
    fen: &str,
    depth: u8,
    scorer: &MaterialMobilityScorer,
    generator: &PseudoLegalMoveGenerator,
) -> Result<(), ChessError> {
    let mut game = GameState::from_fen(fen)?;
    let config = SearchConfig { depth };

    let pruned = find_best_move(&mut game, generator, scorer, config);
    let full = find_best_move_full_width(&mut game, generator, scorer, config);

    let best = pruned
        .best_move
        .map_or_else(|| "0000".to_owned(), |mv| mv.to_string());
    println!(
        "{name}: depth={} best_move={} best_score={} pruned_nodes={} pruned_ms={} full_nodes={} full_ms={} agree={}",
        depth,
        best,
        pruned.best_score,
        pruned.nodes,
        pruned.elapsed_ms,
        full.nodes,
        full.elapsed_ms,
        pruned.best_move == full.best_move && pruned.best_score == full.best_score
    );
    Ok(())
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let depth = parse_arg_u8("--depth", 3);
    let perspective = match arg_value("--evaluation") {
        Some(value) => ScoringPerspective::from_option_value(&value)
            .ok_or_else(|| ChessError::InvalidOption(format!("invalid evaluation '{value}'")))?,
        None => ScoringPerspective::default(),
    };
    let scorer = MaterialMobilityScorer::new(perspective);
    let generator = PseudoLegalMoveGenerator;
    let suite = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        (
            "classical_mid",
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        ),
        ("hanging_queen", "4k3/8/8/8/q7/8/8/R3K3 w - - 0 1"),
        ("end_kpk", "8/8/8/8/8/4k3/4P3/4K3 w - - 0 1"),
    ];

    println!(
        "search baseline: depth={depth} evaluation={}",
        perspective.option_value()
    );
    for (name, fen) in suite {
        run_case(name, fen, depth, &scorer, &generator)?;
    }
    Ok(())
}
