//! FEN placement parser.
//!
//! Builds a `GameState` from the placement field of a Forsyth-Edwards Notation
//! string: eight ranks from rank 8 down to rank 1, separated by `/`, with
//! uppercase letters for Light, lowercase for Dark, and digits for runs of
//! empty squares. Any further fields (side to move, castling, en passant,
//! clocks) are accepted and ignored; the returned board has Light to move.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let board_part = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessError::InvalidPlacement("empty FEN".to_owned()))?;

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidPlacement(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(rank_width_error(board_rank));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessError::InvalidPieceChar(ch))?;
            if file >= 8 {
                return Err(rank_width_error(board_rank));
            }

            game_state.place_setup_piece(square_at(file, board_rank), piece)?;
            file += 1;
        }

        if file != 8 {
            return Err(rank_width_error(board_rank));
        }
    }

    Ok(())
}

fn rank_width_error(board_rank: u8) -> ChessError {
    ChessError::InvalidPlacement(format!("rank {} does not sum to 8 files", board_rank + 1))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.piece_at(0), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(game_state.piece_at(60), Some(Piece::new(Color::Dark, PieceKind::King)));
        assert_eq!(game_state.pieces().count(), 32);
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let with_fields = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 12 40").expect("FEN should parse");
        let bare = parse_fen("4k3/8/8/8/8/8/8/4K3").expect("FEN should parse");
        assert_eq!(with_fields, bare);
        assert_eq!(with_fields.side_to_move, Color::Light);
    }

    #[test]
    fn unknown_piece_letter_fails_fast() {
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4X3"),
            Err(ChessError::InvalidPieceChar('X'))
        );
    }

    #[test]
    fn malformed_ranks_are_rejected() {
        assert!(matches!(parse_fen("8/8/8"), Err(ChessError::InvalidPlacement(_))));
        assert!(matches!(
            parse_fen("9/8/8/8/8/8/8/8"),
            Err(ChessError::InvalidPlacement(_))
        ));
        assert!(matches!(
            parse_fen("ppppppppp/8/8/8/8/8/8/8"),
            Err(ChessError::InvalidPlacement(_))
        ));
        assert!(matches!(
            parse_fen("7/8/8/8/8/8/8/8"),
            Err(ChessError::InvalidPlacement(_))
        ));
        assert!(matches!(parse_fen(""), Err(ChessError::InvalidPlacement(_))));
    }

    #[test]
    fn second_king_of_one_color_is_rejected() {
        assert_eq!(
            parse_fen("k6k/8/8/8/8/8/8/4K3"),
            Err(ChessError::DuplicateKing(Color::Dark))
        );
    }
}
