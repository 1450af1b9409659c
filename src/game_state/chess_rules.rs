//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting placement and the pawn start
//! ranks used by double pushes.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
/// Only the placement field is consumed by this engine.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rank index from which a pawn of `color` may push two squares.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}
