//! Engine abstraction layer used by the UCI subsystem.
//!
//! Defines common input parameters and output payloads so engine front-ends
//! stay independent of the search they drive.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::ChessMove, game_state::GameState};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub best_score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;
    fn author(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> ChessResult<()> {
        Err(ChessError::InvalidOption(format!("unknown option '{name}'")))
    }

    /// Pick a move for the side to move. The board is borrowed exclusively
    /// while searching and is returned unchanged.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
