//! Errors used throughout the chess core.
//!
//! `ChessError` is the single error type returned by setup parsing, snapshot
//! decoding, coordinate conversion, and the engine front-end. Move generation,
//! make/unmake, and search never fail; they do not return `Result`.
//!
//! Usage guidelines:
//! - Parsing and input variants (`InvalidPieceChar`, `InvalidPlacement`,
//!   `InvalidSquare`, `InvalidSnapshot`) are recoverable and suitable for
//!   reporting back to whoever supplied the text.
//! - `IllegalMove` and `NoMoveAvailable` are domain-level outcomes the caller
//!   must handle before touching the board.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{ChessMove, Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A placement string contained a character that is neither a piece
    /// letter nor an empty-run digit.
    InvalidPieceChar(char),

    /// A placement string had the wrong shape (rank count, rank width).
    InvalidPlacement(String),

    /// A coordinate was outside the board or could not be parsed.
    InvalidSquare(String),

    /// More than one king of the same color at setup.
    DuplicateKing(Color),

    /// A pawn snapshot string was malformed.
    InvalidSnapshot(String),

    /// A piece cannot be written into the pawn-only snapshot encoding.
    UnrepresentablePiece(Square),

    /// The move is not in the side to move's pseudo-legal list.
    IllegalMove(ChessMove),

    /// The side to move has no pseudo-legal moves, so there is nothing to play.
    NoMoveAvailable,

    /// An engine option name or value was rejected.
    InvalidOption(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidPieceChar(ch) => {
                write!(f, "invalid piece character '{ch}' in board placement")
            }
            ChessError::InvalidPlacement(msg) => write!(f, "invalid board placement: {msg}"),
            ChessError::InvalidSquare(msg) => write!(f, "invalid square: {msg}"),
            ChessError::DuplicateKing(color) => {
                write!(f, "board placement has more than one {color:?} king")
            }
            ChessError::InvalidSnapshot(msg) => write!(f, "invalid pawn snapshot: {msg}"),
            ChessError::UnrepresentablePiece(square) => {
                write!(f, "square {square} holds a piece the pawn snapshot cannot encode")
            }
            ChessError::IllegalMove(mv) => write!(f, "move {mv} is not available"),
            ChessError::NoMoveAvailable => write!(f, "side to move has no moves"),
            ChessError::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl Error for ChessError {}
