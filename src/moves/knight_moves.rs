//! Knight jump geometry.
//!
//! Knights are generated from fixed index offsets. An offset that crosses a
//! board edge wraps onto another rank with a large file change, so any
//! destination more than two files away from the source is discarded.

use crate::game_state::chess_types::{file_of, Square, BOARD_SQUARES};

/// Offsets in generation order.
pub const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -6, -10, -15, -17];

const MAX_KNIGHT_FILE_DELTA: u8 = 2;

/// Destination of a knight jump from `from` by `offset`, if it stays on the board.
#[inline]
pub fn knight_destination(from: Square, offset: i8) -> Option<Square> {
    let to = offset_square(from, offset)?;
    (file_of(from).abs_diff(file_of(to)) <= MAX_KNIGHT_FILE_DELTA).then_some(to)
}

/// Apply a raw index offset, rejecting results outside `0..64`.
#[inline]
pub(crate) fn offset_square(from: Square, offset: i8) -> Option<Square> {
    let to = i16::from(from) + i16::from(offset);
    (0..BOARD_SQUARES as i16).contains(&to).then_some(to as Square)
}
