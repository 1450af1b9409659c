use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_rays::Direction;

/// Bishop directions followed by rook directions.
pub const QUEEN_DIRECTIONS: [Direction; 8] = generate_queen_directions();

const fn generate_queen_directions() -> [Direction; 8] {
    let mut table = [(0i8, 0i8); 8];
    let mut i = 0usize;

    while i < 4 {
        table[i] = BISHOP_DIRECTIONS[i];
        table[i + 4] = ROOK_DIRECTIONS[i];
        i += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;
    use crate::moves::sliding_rays::Ray;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let total: usize = QUEEN_DIRECTIONS
            .iter()
            .map(|&direction| Ray::new(27, direction).count())
            .sum();
        assert_eq!(total, 27);
        assert_eq!(QUEEN_DIRECTIONS[0], (1, 1));
        assert_eq!(QUEEN_DIRECTIONS[4], (0, 1));
    }
}
