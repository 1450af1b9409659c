//! Pseudo-legal move generation pipeline.
//!
//! Scans the board in ascending square order and, for each piece belonging to
//! the side to move, appends that piece's moves in its fixed per-piece order.
//! The resulting order is deterministic and decides search tie-breaks.
//! Moves are never filtered for king safety.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Typical upper bound on pseudo-legal moves; sized so most positions never reallocate.
pub const MOVE_LIST_CAPACITY: usize = 64;

pub trait MoveGenerator: Send + Sync {
    /// Append the moves for `game_state.side_to_move` to `out`.
    fn generate_moves_into(&self, game_state: &GameState, out: &mut Vec<ChessMove>);

    fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
        let mut out = Vec::with_capacity(MOVE_LIST_CAPACITY);
        self.generate_moves_into(game_state, &mut out);
        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    #[inline]
    fn generate_moves_into(&self, game_state: &GameState, out: &mut Vec<ChessMove>) {
        generate_pseudo_legal_moves_into(game_state, out);
    }
}

pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(MOVE_LIST_CAPACITY);
    generate_pseudo_legal_moves_into(game_state, &mut out);
    out
}

pub fn generate_pseudo_legal_moves_into(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;

    for (from, piece) in game_state.pieces() {
        if piece.color != side {
            continue;
        }

        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, side, out),
            PieceKind::Knight => generate_knight_moves(game_state, from, side, out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, side, out),
            PieceKind::Rook => generate_rook_moves(game_state, from, side, out),
            PieceKind::Queen => generate_queen_moves(game_state, from, side, out),
            PieceKind::King => generate_king_moves(game_state, from, side, out),
        }
    }
}

/// Whether the piece on `from` may move to `to` right now, answered by
/// membership in the side to move's generated list.
pub fn can_move(game_state: &GameState, from: Square, to: Square) -> bool {
    generate_pseudo_legal_moves(game_state).contains(&ChessMove::new(from, to))
}
