//! Perft node counting over make/unmake.
//!
//! Counts leaf nodes of the pseudo-legal move tree. Used as a generator sanity
//! check and as the benchmark workload; unlike legal perft it also counts
//! moves that leave the mover's king attacked, which only matters once kings
//! can actually be attacked.

use tracing::trace;

use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::{make_move, unmake_move};
use crate::move_generation::move_generator::{MoveGenerator, PseudoLegalMoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generator.generate_moves(game_state);
    let mut total = PerftCounts::default();

    for mv in moves {
        let undo = make_move(game_state, mv);
        if depth == 1 {
            total.nodes += 1;
            if undo.is_capture() {
                total.captures += 1;
            }
        } else {
            total.merge(perft(generator, game_state, depth - 1));
        }
        unmake_move(game_state, undo);
    }

    total
}

/// Per-root-move node counts, handy when comparing against another generator.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(String, u64)> {
    let moves = generator.generate_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());

    for mv in moves {
        let undo = make_move(game_state, mv);
        let nodes = perft(generator, game_state, depth.saturating_sub(1)).nodes;
        unmake_move(game_state, undo);
        trace!(%mv, nodes, "perft divide");
        out.push((mv.to_string(), nodes));
    }

    out
}

#[inline]
pub fn perft_pseudo_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut scratch = game_state.clone();
    perft(&PseudoLegalMoveGenerator, &mut scratch, depth)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, perft_pseudo_legal};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn start_position_perft_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_pseudo_legal(&game, 0).nodes, 1);
        assert_eq!(perft_pseudo_legal(&game, 1).nodes, 20);
        assert_eq!(perft_pseudo_legal(&game, 2).nodes, 400);

        let depth3 = perft_pseudo_legal(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let _ = perft(&PseudoLegalMoveGenerator, &mut game, 3);
        assert_eq!(game, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut game = GameState::new_game();
        let divide = perft_divide(&PseudoLegalMoveGenerator, &mut game, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
