//! Crate root module declarations for the ArrayChess engine.
//!
//! Exposes the array board, pseudo-legal move generation, make/unmake,
//! evaluation, negamax search, the UCI front-end, and text helpers so the
//! binaries, benches, and tests can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
}

pub mod search {
    pub mod board_scoring;
    pub mod negamax;
}
pub mod uci {
    pub mod uci_top;
}
pub mod engines {
    pub mod engine_negamax;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pawn_snapshot;
    pub mod random_position;
    pub mod render_game_state;
}
