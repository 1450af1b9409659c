use crate::game_state::{chess_types::*, game_state::GameState};

/// True when `square` holds a piece of `color`.
#[inline]
pub fn is_friendly(game_state: &GameState, square: Square, color: Color) -> bool {
    game_state.color_at(square) == Some(color)
}

/// True when `square` holds a piece of the side opposing `color`.
#[inline]
pub fn is_enemy(game_state: &GameState, square: Square, color: Color) -> bool {
    game_state.color_at(square) == Some(color.opposite())
}
