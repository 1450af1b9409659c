use crate::game_state::chess_types::*;

/// Single undo record for `make_move` / `unmake_move`: the move plus whatever
/// occupied its destination when it was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub captured_piece: Option<Piece>,
}

impl UndoState {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
