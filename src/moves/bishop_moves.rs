//! Bishop ray directions.

use crate::moves::sliding_rays::Direction;

/// North-east, north-west, south-east, south-west.
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

#[cfg(test)]
mod tests {
    use super::BISHOP_DIRECTIONS;
    use crate::moves::sliding_rays::Ray;

    #[test]
    fn bishop_rays_from_d4_have_thirteen_squares() {
        let d4 = 27u8;
        let total: usize = BISHOP_DIRECTIONS
            .iter()
            .map(|&direction| Ray::new(d4, direction).count())
            .sum();
        assert_eq!(total, 13);
    }
}
