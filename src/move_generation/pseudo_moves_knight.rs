use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::is_friendly;
use crate::moves::knight_moves::{knight_destination, KNIGHT_OFFSETS};

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    for offset in KNIGHT_OFFSETS {
        let Some(to) = knight_destination(from, offset) else {
            continue;
        };
        if is_friendly(game_state, to, color) {
            continue;
        }
        out.push(ChessMove::new(from, to));
    }
}
