//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search owns the board exclusively for its whole duration: every node
//! generates its moves, and for each one applies it with `make_move`, recurses
//! from the opponent's point of view, and restores the board with
//! `unmake_move` before the next sibling. No positions are cloned.
//!
//! Positions where the side to move has no pseudo-legal moves score `0`.
//! There is no check detection, so this covers stalemate and mate alike.

use std::time::Instant;

use tracing::{debug, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_apply::{make_move, unmake_move};
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::BoardScorer;

/// Half-width of the root search window. Leaves never score near it.
pub const SCORE_BOUND: i32 = i32::MAX / 2;

/// Score of a node whose side to move has no moves.
pub const NO_MOVES_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    /// `None` when the root has no moves or the search depth is zero.
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Search `config.depth` plies and return the first root move with the
/// highest score, in generation order.
///
/// The board is borrowed mutably and is identical to its input on return.
pub fn find_best_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    run_search(game_state, generator, scorer, config, true)
}

/// Same search without alpha-beta cutoffs. Visits every node; exists as the
/// reference the pruned search must agree with.
pub fn find_best_move_full_width<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    run_search(game_state, generator, scorer, config, false)
}

fn run_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &mut GameState,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
    prune: bool,
) -> SearchResult {
    let started = Instant::now();
    let mut search = Negamax {
        generator,
        scorer,
        prune,
        nodes: 0,
    };

    let (best_move, best_score) = search.root(game_state, config.depth);
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let best_move_lan = best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string());

    debug!(
        depth = config.depth,
        prune,
        nodes = search.nodes,
        elapsed_ms,
        best_score,
        best_move = %best_move_lan,
        "search finished"
    );

    SearchResult {
        best_move,
        best_score,
        depth: config.depth,
        nodes: search.nodes,
        elapsed_ms,
    }
}

struct Negamax<'a, G, S> {
    generator: &'a G,
    scorer: &'a S,
    prune: bool,
    nodes: u64,
}

impl<G: MoveGenerator, S: BoardScorer> Negamax<'_, G, S> {
    fn root(&mut self, game_state: &mut GameState, depth: u8) -> (Option<ChessMove>, i32) {
        self.nodes += 1;

        if depth == 0 {
            return (None, self.scorer.score(game_state));
        }

        let moves = self.generator.generate_moves(game_state);
        if moves.is_empty() {
            debug!(fen = %game_state.get_fen(), "no root moves");
            return (None, NO_MOVES_SCORE);
        }

        let mut best: Option<(ChessMove, i32)> = None;

        for mv in moves {
            let undo = make_move(game_state, mv);
            // Full window per root child: every root score is exact.
            let score = -self.negamax(game_state, depth - 1, -SCORE_BOUND, SCORE_BOUND, 1);
            unmake_move(game_state, undo);

            debug!(%mv, score, "root move");
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, NO_MOVES_SCORE),
        }
    }

    /// Score for the side to move at this node. The caller negates.
    fn negamax(
        &mut self,
        game_state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        ply: u8,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.scorer.score(game_state);
        }

        let moves = self.generator.generate_moves(game_state);
        if moves.is_empty() {
            return NO_MOVES_SCORE;
        }

        let mut best = i32::MIN;

        for mv in moves {
            let undo = make_move(game_state, mv);
            let score = -self.negamax(game_state, depth - 1, -beta, -alpha, ply.saturating_add(1));
            unmake_move(game_state, undo);

            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if self.prune && alpha >= beta {
                trace!(ply, depth, alpha, beta, %mv, "beta cutoff");
                break;
            }
        }

        best
    }
}
