//! Pseudo-legal king steps. No castling, and no check awareness: a king may
//! step next to the enemy king or capture it like any other piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::is_friendly;
use crate::moves::king_moves::{king_destination, KING_OFFSETS};

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for offset in KING_OFFSETS {
        let Some(to) = king_destination(from, offset) else {
            continue;
        };
        if is_friendly(game_state, to, color) {
            continue;
        }
        out.push(ChessMove::new(from, to));
    }
}
