//! Pawn push and capture geometry.
//!
//! Pushes and captures are expressed per color. There is no promotion: a pawn
//! on its last rank has no forward square and stays a pawn.

use crate::game_state::chess_types::{file_of, rank_of, Color, Square};

/// Square directly in front of a pawn of `color`, if any.
#[inline]
pub const fn pawn_push_square(color: Color, from: Square) -> Option<Square> {
    match color {
        Color::Light if rank_of(from) < 7 => Some(from + 8),
        Color::Dark if rank_of(from) > 0 => Some(from - 8),
        _ => None,
    }
}

/// Diagonal capture squares toward the lower file then the higher file.
#[inline]
pub fn pawn_capture_squares(color: Color, from: Square) -> [Option<Square>; 2] {
    let file = file_of(from);
    let Some(ahead) = pawn_push_square(color, from) else {
        return [None, None];
    };
    let toward_a = (file > 0).then(|| ahead - 1);
    let toward_h = (file < 7).then(|| ahead + 1);
    [toward_a, toward_h]
}
