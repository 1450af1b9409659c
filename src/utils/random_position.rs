//! Seeded random boards for property tests and benchmarks.
//!
//! Pieces are scattered independently per square with a random side to move.
//! Each color gets at most one king; pawns may land on any rank, including the
//! back ranks, since the generator has no promotion to trip over.

use rand::Rng;

use crate::game_state::{chess_types::*, game_state::GameState};

const OCCUPANCY_PROBABILITY: f64 = 0.3;

pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let mut game_state = GameState::new_empty();
    game_state.side_to_move = if rng.random_bool(0.5) {
        Color::Light
    } else {
        Color::Dark
    };

    for square in 0..BOARD_SQUARES as Square {
        if !rng.random_bool(OCCUPANCY_PROBABILITY) {
            continue;
        }

        let color = if rng.random_bool(0.5) {
            Color::Light
        } else {
            Color::Dark
        };
        let kind = PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())];
        if kind == PieceKind::King && game_state.king_square(color).is_some() {
            continue;
        }

        game_state.set_piece(square, Some(Piece::new(color, kind)));
    }

    game_state
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::random_position;
    use crate::game_state::chess_types::*;

    #[test]
    fn same_seed_gives_same_board() {
        let a = random_position(&mut StdRng::seed_from_u64(99));
        let b = random_position(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn never_places_two_kings_of_one_color() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let game = random_position(&mut rng);
            for color in [Color::Light, Color::Dark] {
                let kings = game
                    .pieces()
                    .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                    .count();
                assert!(kings <= 1);
            }
        }
    }
}
