//! Pluggable board evaluation.
//!
//! The evaluator is material plus mobility. Material is an absolute
//! Light-minus-Dark sum; mobility counts the side to move's pseudo-legal
//! moves. How the two terms are combined is a `ScoringPerspective` choice:
//! negamax needs every leaf scored for the side to move, which
//! `SideToMove` provides by flipping material when Dark moves. `Absolute`
//! adds the raw terms and reproduces the behavior of the earlier engine.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{
    MoveGenerator, PseudoLegalMoveGenerator, MOVE_LIST_CAPACITY,
};

/// Weight of one pseudo-legal move in the mobility term.
pub const MOBILITY_WEIGHT: i32 = 2;

pub trait BoardScorer: Send + Sync {
    /// Score of `game_state` as seen by its side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Light material minus Dark material, independent of the side to move.
pub fn evaluate_material(game_state: &GameState) -> i32 {
    game_state
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::Light => piece_value(piece.kind),
            Color::Dark => -piece_value(piece.kind),
        })
        .sum()
}

/// Twice the number of pseudo-legal moves for the side to move.
#[inline]
pub fn evaluate_mobility(game_state: &GameState) -> i32 {
    evaluate_mobility_with(&PseudoLegalMoveGenerator, game_state)
}

/// Mobility counted with `generator`, so it matches the moves a search sees.
pub fn evaluate_mobility_with<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
) -> i32 {
    let mut moves = Vec::with_capacity(MOVE_LIST_CAPACITY);
    generator.generate_moves_into(game_state, &mut moves);
    MOBILITY_WEIGHT * moves.len() as i32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPerspective {
    /// Material from the mover's point of view plus mobility.
    #[default]
    SideToMove,
    /// Light-minus-Dark material plus the mover's mobility.
    Absolute,
}

impl ScoringPerspective {
    pub fn from_option_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "side_to_move" | "sidetomove" | "relative" => Some(ScoringPerspective::SideToMove),
            "absolute" | "parity" => Some(ScoringPerspective::Absolute),
            _ => None,
        }
    }

    pub const fn option_value(self) -> &'static str {
        match self {
            ScoringPerspective::SideToMove => "side_to_move",
            ScoringPerspective::Absolute => "absolute",
        }
    }
}

/// Material plus pseudo-legal mobility under a chosen perspective.
#[inline]
pub fn evaluate_board(game_state: &GameState, perspective: ScoringPerspective) -> i32 {
    evaluate_board_with(&PseudoLegalMoveGenerator, game_state, perspective)
}

pub fn evaluate_board_with<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    perspective: ScoringPerspective,
) -> i32 {
    let material = evaluate_material(game_state);
    let material = match (perspective, game_state.side_to_move) {
        (ScoringPerspective::SideToMove, Color::Dark) => -material,
        _ => material,
    };
    material + evaluate_mobility_with(generator, game_state)
}

/// Material plus mobility. Mobility is counted with `generator`; pair the
/// scorer with the generator the search uses.
#[derive(Debug, Clone, Copy)]
pub struct MaterialMobilityScorer<G = PseudoLegalMoveGenerator> {
    pub perspective: ScoringPerspective,
    generator: G,
}

impl MaterialMobilityScorer {
    #[inline]
    pub const fn new(perspective: ScoringPerspective) -> Self {
        Self {
            perspective,
            generator: PseudoLegalMoveGenerator,
        }
    }
}

impl Default for MaterialMobilityScorer {
    fn default() -> Self {
        Self::new(ScoringPerspective::default())
    }
}

impl<G: MoveGenerator> MaterialMobilityScorer<G> {
    #[inline]
    pub const fn with_generator(generator: G, perspective: ScoringPerspective) -> Self {
        Self {
            perspective,
            generator,
        }
    }
}

impl<G: MoveGenerator> BoardScorer for MaterialMobilityScorer<G> {
    #[inline]
    fn score(&self, game_state: &GameState) -> i32 {
        evaluate_board_with(&self.generator, game_state, self.perspective)
    }
}
