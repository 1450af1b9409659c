//! Fixed-depth negamax engine.
//!
//! Wraps `search::negamax` behind the `Engine` trait, holding the search
//! depth and the scoring perspective as options.

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::{chess_types::ChessMove, game_state::GameState};
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::search::board_scoring::{MaterialMobilityScorer, ScoringPerspective};
use crate::search::negamax::{find_best_move, SearchConfig};

pub const MAX_DEPTH: u8 = 8;

pub struct NegamaxEngine {
    move_generator: PseudoLegalMoveGenerator,
    scorer: MaterialMobilityScorer,
    config: SearchConfig,
}

impl NegamaxEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), ScoringPerspective::default())
    }

    pub fn with_config(config: SearchConfig, perspective: ScoringPerspective) -> Self {
        Self {
            move_generator: PseudoLegalMoveGenerator,
            scorer: MaterialMobilityScorer::new(perspective),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn perspective(&self) -> ScoringPerspective {
        self.scorer.perspective
    }

    /// Best move at the configured depth, or `NoMoveAvailable` when the side to
    /// move has nothing to play.
    pub fn best_move(&mut self, game_state: &mut GameState) -> ChessResult<ChessMove> {
        let output = self.choose_move(game_state, &GoParams::default())?;
        output.best_move.ok_or(ChessError::NoMoveAvailable)
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "ArrayChess Negamax"
    }

    fn author(&self) -> &str {
        "array_chess developers"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .map_err(|_| ChessError::InvalidOption(format!("invalid Depth value '{value}'")))?;
            self.config.depth = depth.clamp(1, MAX_DEPTH);
        } else if name.eq_ignore_ascii_case("Evaluation") {
            self.scorer.perspective = ScoringPerspective::from_option_value(value).ok_or_else(
                || ChessError::InvalidOption(format!("invalid Evaluation value '{value}'")),
            )?;
        } else {
            return Err(ChessError::InvalidOption(format!("unknown option '{name}'")));
        }

        info!(
            depth = self.config.depth,
            evaluation = self.scorer.perspective.option_value(),
            "engine option set"
        );
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            depth: params
                .depth
                .unwrap_or(self.config.depth)
                .clamp(1, MAX_DEPTH),
        };
        let result = find_best_move(game_state, &self.move_generator, &self.scorer, config);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} time {}",
            result.depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        out.info_lines.push(format!(
            "info string negamax_engine evaluation {}",
            self.scorer.perspective.option_value()
        ));

        out.best_move = result.best_move;
        out.best_score = Some(result.best_score);
        Ok(out)
    }
}
