//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, keeps the current position, routes `go` requests to
//! the engine, and emits protocol output. The position here is the only board
//! record: moves from `position ... moves` and the engine's choices are
//! applied to it between searches, never during one.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_negamax::{NegamaxEngine, MAX_DEPTH};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::move_apply::make_move;
use crate::search::negamax::SearchConfig;
use crate::utils::long_algebraic::long_algebraic_to_move;
use crate::utils::render_game_state::render_game_state;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct UciState {
    game_state: GameState,
    engine: Box<dyn Engine>,
}

impl Default for UciState {
    fn default() -> Self {
        Self::new()
    }
}

impl UciState {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            engine: Box::new(NegamaxEngine::new()),
        }
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one command line. Returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    SearchConfig::default().depth,
                    MAX_DEPTH
                )?;
                writeln!(
                    out,
                    "option name Evaluation type combo default side_to_move var side_to_move var absolute"
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    warn!(%err, "setoption rejected");
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    warn!(%err, "position rejected");
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "go" => {
                self.handle_go(trimmed, out)?;
            }
            "d" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
                writeln!(
                    out,
                    "Fen: {} ({:?} to move)",
                    self.game_state.get_fen(),
                    self.game_state.side_to_move
                )?;
            }
            "stop" | "ponderhit" | "register" | "debug" => {
                // Search is synchronous; nothing to interrupt.
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown commands are ignored for UCI compatibility.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> ChessResult<()> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.engine
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    fn handle_position(&mut self, line: &str) -> ChessResult<()> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut base_state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(next) = tokens.next_if(|tok| *tok != "moves") {
                    fen_parts.push(next);
                }
                let mut state = GameState::from_fen(&fen_parts.join(" "))?;
                if fen_parts.get(1) == Some(&"b") {
                    state.side_to_move = Color::Dark;
                }
                state
            }
            Some(other) => {
                return Err(ChessError::InvalidPlacement(format!(
                    "unsupported position token '{other}'"
                )))
            }
            None => {
                return Err(ChessError::InvalidPlacement(
                    "incomplete position command".to_owned(),
                ))
            }
        };

        if tokens.next_if_eq(&"moves").is_some() {
            for lan in tokens {
                let mv = long_algebraic_to_move(lan, &base_state)?;
                make_move(&mut base_state, mv);
            }
        }

        self.game_state = base_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let params = parse_go_params(line);
        let result = match self.engine.choose_move(&mut self.game_state, &params) {
            Ok(result) => result,
            Err(err) => {
                warn!(%err, "go failed");
                writeln!(out, "info string go error: {}", err)?;
                return writeln!(out, "bestmove 0000");
            }
        };

        for info in &result.info_lines {
            writeln!(out, "{}", info)?;
        }

        match result.best_move {
            Some(best_move) => writeln!(out, "bestmove {}", best_move),
            None => writeln!(out, "bestmove 0000"),
        }
    }
}

fn parse_go_params(line: &str) -> GoParams {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace();
    while let Some(tok) = tokens.next() {
        if tok == "depth" {
            params.depth = tokens.next().and_then(|x| x.parse::<u8>().ok());
        }
    }
    params
}
