//! Pawn-only board snapshot codec.
//!
//! A snapshot is exactly 64 ASCII digits, one per square, read row by row from
//! the top of the board (rank 8) down to rank 1 and from the a-file to the
//! h-file within a row. `'0'` is an empty square; any other digit `d` is a
//! pawn owned by player `d - 1`, where player 0 is Light and player 1 is Dark.
//! Only pawns can be represented, so this is a save/restore aid for pawn
//! games and debugging rather than a general position format.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub const SNAPSHOT_LEN: usize = BOARD_SQUARES;

/// Square for the character at `index` of a snapshot string.
#[inline]
pub const fn snapshot_square(index: usize) -> Square {
    let row = (index / 8) as u8;
    let file = (index % 8) as u8;
    square_at(file, 7 - row)
}

pub fn decode_pawn_snapshot(snapshot: &str) -> ChessResult<GameState> {
    let bytes = snapshot.as_bytes();
    if bytes.len() != SNAPSHOT_LEN {
        return Err(ChessError::InvalidSnapshot(format!(
            "expected {SNAPSHOT_LEN} characters, found {}",
            bytes.len()
        )));
    }

    let mut game_state = GameState::new_empty();

    for (index, &byte) in bytes.iter().enumerate() {
        let owner = match byte {
            b'0' => continue,
            b'1' => Color::Light,
            b'2' => Color::Dark,
            _ => {
                return Err(ChessError::InvalidSnapshot(format!(
                    "character '{}' at {index} is not a player digit",
                    char::from(byte)
                )))
            }
        };
        game_state.set_piece(snapshot_square(index), Some(Piece::new(owner, PieceKind::Pawn)));
    }

    Ok(game_state)
}

pub fn encode_pawn_snapshot(game_state: &GameState) -> ChessResult<String> {
    let mut out = String::with_capacity(SNAPSHOT_LEN);

    for index in 0..SNAPSHOT_LEN {
        let square = snapshot_square(index);
        let ch = match game_state.piece_at(square) {
            None => '0',
            Some(Piece {
                kind: PieceKind::Pawn,
                color,
            }) => char::from(b'1' + color.index() as u8),
            Some(_) => return Err(ChessError::UnrepresentablePiece(square)),
        };
        out.push(ch);
    }

    Ok(out)
}
