//! In-place make/unmake.
//!
//! `make_move` mutates the board and returns the `UndoState` needed to reverse
//! it; `unmake_move` restores the board exactly. Search reuses one board
//! buffer across the whole recursion through this pair, so the round trip
//! must be the identity on both the cells and the side to move.
//!
//! Neither function checks that the move came from the generator. Applying a
//! foreign move silently relocates whatever sits on `from`.

use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};

pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> UndoState {
    debug_assert!((mv.from as usize) < BOARD_SQUARES, "from out of range: {mv:?}");
    debug_assert!((mv.to as usize) < BOARD_SQUARES, "to out of range: {mv:?}");

    let captured_piece = game_state.cells[mv.to as usize];
    game_state.cells[mv.to as usize] = game_state.cells[mv.from as usize].take();
    game_state.side_to_move = game_state.side_to_move.opposite();

    UndoState { mv, captured_piece }
}

pub fn unmake_move(game_state: &mut GameState, undo: UndoState) {
    let UndoState { mv, captured_piece } = undo;
    debug_assert!((mv.from as usize) < BOARD_SQUARES, "from out of range: {mv:?}");
    debug_assert!((mv.to as usize) < BOARD_SQUARES, "to out of range: {mv:?}");

    game_state.cells[mv.from as usize] = game_state.cells[mv.to as usize];
    game_state.cells[mv.to as usize] = captured_piece;
    game_state.side_to_move = game_state.side_to_move.opposite();
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{make_move, unmake_move};
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::move_generator::generate_pseudo_legal_moves;
    use crate::utils::random_position::random_position;

    #[test]
    fn make_move_relocates_piece_and_flips_side() {
        let mut game = GameState::new_game();
        let undo = make_move(&mut game, ChessMove::new(12, 28));

        assert_eq!(undo.captured_piece, None);
        assert!(game.is_empty_square(12));
        assert_eq!(game.piece_at(28), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(game.side_to_move, Color::Dark);
    }

    #[test]
    fn capture_is_recorded_and_restored() {
        let mut game = GameState::from_fen("8/8/8/3p4/4P3/8/8/8").expect("FEN should parse");
        let before = game.clone();

        let undo = make_move(&mut game, ChessMove::new(28, 35));
        assert_eq!(undo.captured_piece, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        assert!(undo.is_capture());
        assert_eq!(game.pieces().count(), 1);

        unmake_move(&mut game, undo);
        assert_eq!(game, before);
    }

    #[test]
    fn make_unmake_round_trips_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let mut game = random_position(&mut rng);
            let before = game.clone();

            for mv in generate_pseudo_legal_moves(&before) {
                let undo = make_move(&mut game, mv);
                assert_ne!(game, before);
                unmake_move(&mut game, undo);
                assert_eq!(game, before, "round trip of {mv} from {}", before.get_fen());
            }
        }
    }

    #[test]
    fn nested_make_unmake_restores_start_position() {
        let mut game = GameState::new_game();
        let start = game.clone();

        let mut undo_stack = Vec::new();
        for lan in [(12, 28), (51, 35), (28, 35), (59, 35)] {
            undo_stack.push(make_move(&mut game, ChessMove::new(lan.0, lan.1)));
        }
        assert_eq!(game.piece_at(35), Some(Piece::new(Color::Dark, PieceKind::Queen)));

        while let Some(undo) = undo_stack.pop() {
            unmake_move(&mut game, undo);
        }
        assert_eq!(game, start);
    }
}
