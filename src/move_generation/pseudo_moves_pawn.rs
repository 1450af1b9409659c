//! Pseudo-legal pawn moves: single push, double push from the start rank,
//! diagonal captures onto enemy pieces. No en passant, no promotion.

use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::pseudo_move_shared::is_enemy;
use crate::moves::pawn_moves::{pawn_capture_squares, pawn_push_square};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    if let Some(one_step) = pawn_push_square(color, from) {
        if game_state.is_empty_square(one_step) {
            out.push(ChessMove::new(from, one_step));

            if rank_of(from) == pawn_start_rank(color) {
                if let Some(two_step) = pawn_push_square(color, one_step) {
                    if game_state.is_empty_square(two_step) {
                        out.push(ChessMove::new(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_capture_squares(color, from).into_iter().flatten() {
        if is_enemy(game_state, to, color) {
            out.push(ChessMove::new(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn pawn_moves(fen: &str, from: Square, color: Color) -> Vec<ChessMove> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, color, &mut out);
        out
    }

    #[test]
    fn start_rank_pawn_pushes_one_then_two() {
        let moves = pawn_moves("8/8/8/8/8/8/4P3/8", 12, Color::Light);
        assert_eq!(moves, vec![ChessMove::new(12, 20), ChessMove::new(12, 28)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // Blocker directly ahead stops both pushes; blocker two ahead stops only the double.
        assert!(pawn_moves("8/8/8/8/8/4n3/4P3/8", 12, Color::Light).is_empty());
        assert_eq!(
            pawn_moves("8/8/8/8/4n3/8/4P3/8", 12, Color::Light),
            vec![ChessMove::new(12, 20)]
        );
    }

    #[test]
    fn captures_only_enemy_pieces() {
        // Dark pawn on d5 with a Light knight on c4 and a Dark knight on e4.
        let moves = pawn_moves("8/8/8/3p4/2N1n3/8/8/8", 35, Color::Dark);
        assert_eq!(moves, vec![ChessMove::new(35, 27), ChessMove::new(35, 26)]);
    }

    #[test]
    fn pawn_on_last_rank_stays_put() {
        assert!(pawn_moves("4P3/8/8/8/8/8/8/8", 60, Color::Light).is_empty());
    }
}
