//! Ray walking for bishops, rooks, and queens.
//!
//! A ray is walked in file/rank coordinates rather than raw index offsets, so
//! every step moves at most one file and one rank and the board edge ends the
//! ray. Index arithmetic can never wrap onto a neighbouring rank.

use crate::game_state::chess_types::{file_of, rank_of, square_at, Square};

/// One step of a sliding direction as `(file_step, rank_step)`, each in `-1..=1`.
pub type Direction = (i8, i8);

/// Squares along a direction, nearest first, stopping at the board edge.
#[derive(Debug, Clone)]
pub struct Ray {
    file: i8,
    rank: i8,
    direction: Direction,
}

impl Ray {
    #[inline]
    pub fn new(from: Square, direction: Direction) -> Self {
        debug_assert!(direction.0.abs() <= 1 && direction.1.abs() <= 1);
        Self {
            file: file_of(from) as i8,
            rank: rank_of(from) as i8,
            direction,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let file = self.file + self.direction.0;
        let rank = self.rank + self.direction.1;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return None;
        }
        self.file = file;
        self.rank = rank;
        Some(square_at(file as u8, rank as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::Ray;

    #[test]
    fn ray_from_a1_north_east_runs_the_long_diagonal() {
        let squares: Vec<u8> = Ray::new(0, (1, 1)).collect();
        assert_eq!(squares, vec![9, 18, 27, 36, 45, 54, 63]);
    }

    #[test]
    fn ray_east_from_h_file_is_empty() {
        assert_eq!(Ray::new(15, (1, 0)).count(), 0);
        assert_eq!(Ray::new(7, (1, 1)).count(), 0);
    }

    #[test]
    fn ray_west_stops_at_a_file() {
        let squares: Vec<u8> = Ray::new(10, (-1, 0)).collect();
        assert_eq!(squares, vec![9, 8]);
    }
}
