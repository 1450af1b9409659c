use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::can_move;
use crate::utils::algebraic::algebraic_to_square;

/// Parse a coordinate move (`e2e4`) without checking it against the board.
pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<ChessMove> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(ChessError::InvalidSquare(format!(
            "'{long_algebraic}' is not a four-character coordinate move"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    Ok(ChessMove::new(from, to))
}

/// Parse a coordinate move and require it to be available to the side to move.
pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<ChessMove> {
    let mv = parse_long_algebraic(long_algebraic)?;
    if !can_move(game_state, mv.from, mv.to) {
        return Err(ChessError::IllegalMove(mv));
    }
    Ok(mv)
}
