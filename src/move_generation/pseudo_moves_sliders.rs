//! Pseudo-legal bishop, rook, and queen moves.
//!
//! Each ray adds empty squares, adds the first enemy piece and stops, or stops
//! in front of the first friendly piece.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_rays::{Direction, Ray};

#[inline]
pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_slider_moves(game_state, from, color, &BISHOP_DIRECTIONS, out);
}

#[inline]
pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_slider_moves(game_state, from, color, &ROOK_DIRECTIONS, out);
}

#[inline]
pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<ChessMove>,
) {
    generate_slider_moves(game_state, from, color, &QUEEN_DIRECTIONS, out);
}

fn generate_slider_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    directions: &[Direction],
    out: &mut Vec<ChessMove>,
) {
    for &direction in directions {
        for to in Ray::new(from, direction) {
            match game_state.color_at(to) {
                None => out.push(ChessMove::new(from, to)),
                Some(occupant) if occupant == color => break,
                Some(_) => {
                    out.push(ChessMove::new(from, to));
                    break;
                }
            }
        }
    }
}
