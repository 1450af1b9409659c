//! King step geometry.
//!
//! Same offset-and-filter scheme as knights, with a one-file tolerance.

use crate::game_state::chess_types::{file_of, Square};
use crate::moves::knight_moves::offset_square;

/// Offsets in generation order: east, west, north, south, then diagonals.
pub const KING_OFFSETS: [i8; 8] = [1, -1, 8, -8, 9, 7, -9, -7];

const MAX_KING_FILE_DELTA: u8 = 1;

#[inline]
pub fn king_destination(from: Square, offset: i8) -> Option<Square> {
    let to = offset_square(from, offset)?;
    (file_of(from).abs_diff(file_of(to)) <= MAX_KING_FILE_DELTA).then_some(to)
}

#[cfg(test)]
mod tests {
    use super::{king_destination, KING_OFFSETS};

    fn targets(from: u8) -> Vec<u8> {
        KING_OFFSETS
            .iter()
            .filter_map(|&offset| king_destination(from, offset))
            .collect()
    }

    #[test]
    fn king_from_a1_has_three_targets() {
        assert_eq!(targets(0), vec![1, 8, 9]);
    }

    #[test]
    fn king_on_h_file_does_not_wrap_to_a_file() {
        // h4 = 31; +1 would be a5 and +9 would be b5.
        assert_eq!(targets(31), vec![30, 39, 23, 38, 22]);
    }
}
