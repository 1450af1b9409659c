//! Array board state.
//!
//! `GameState` is the single mutable structure threaded through move
//! generation, make/unmake, and search. It holds one optional piece per cell
//! and the side to move; nothing else. Search borrows it mutably for the whole
//! call and restores it exactly through `unmake_move`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_placement;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Index `rank * 8 + file`, rank 0 is Light's back rank.
    pub cells: [Option<Piece>; BOARD_SQUARES],
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: [None; BOARD_SQUARES],
            side_to_move: Color::Light,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    /// Build a board from the placement field of a FEN string. Light moves first.
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Placement field only; side-to-move and the other FEN fields are not tracked.
    #[inline]
    pub fn get_fen(&self) -> String {
        generate_placement(self)
    }

    /// Materialize a board from an external piece map, for example a UI grid.
    pub fn from_pieces<I>(pieces: I, side_to_move: Color) -> ChessResult<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut game_state = Self {
            side_to_move,
            ..Self::default()
        };

        for (square, piece) in pieces {
            if square as usize >= BOARD_SQUARES {
                return Err(ChessError::InvalidSquare(format!("index {square} is off the board")));
            }
            if game_state.cells[square as usize].is_some() {
                return Err(ChessError::InvalidSquare(format!("index {square} is listed twice")));
            }
            game_state.place_setup_piece(square, piece)?;
        }

        Ok(game_state)
    }

    /// Put a piece on an empty square during setup, refusing a second king.
    pub(crate) fn place_setup_piece(&mut self, square: Square, piece: Piece) -> ChessResult<()> {
        if piece.kind == PieceKind::King && self.king_square(piece.color).is_some() {
            return Err(ChessError::DuplicateKing(piece.color));
        }
        self.cells[square as usize] = Some(piece);
        Ok(())
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square as usize] = piece;
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.cells[square as usize].is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.cells[square as usize].map(|piece| piece.color)
    }

    /// Occupied squares in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(sq, cell)| cell.map(|piece| (sq as Square, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_has_thirty_two_pieces_and_light_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.pieces().count(), 32);
        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(game.piece_at(4), Some(Piece::new(Color::Light, PieceKind::King)));
        assert_eq!(game.piece_at(59), Some(Piece::new(Color::Dark, PieceKind::Queen)));
        assert!(game.is_empty_square(28));
    }

    #[test]
    fn from_pieces_matches_fen_setup() {
        let from_map = GameState::from_pieces(
            [
                (4, Piece::new(Color::Light, PieceKind::King)),
                (60, Piece::new(Color::Dark, PieceKind::King)),
                (12, Piece::new(Color::Light, PieceKind::Pawn)),
            ],
            Color::Dark,
        )
        .expect("piece map should load");

        let mut from_fen = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3").expect("FEN should parse");
        from_fen.side_to_move = Color::Dark;

        assert_eq!(from_map, from_fen);
    }

    #[test]
    fn from_pieces_rejects_second_king_and_bad_squares() {
        let king = Piece::new(Color::Light, PieceKind::King);
        assert_eq!(
            GameState::from_pieces([(4, king), (5, king)], Color::Light),
            Err(ChessError::DuplicateKing(Color::Light))
        );
        assert!(matches!(
            GameState::from_pieces([(64, king)], Color::Light),
            Err(ChessError::InvalidSquare(_))
        ));

        let pawn = Piece::new(Color::Dark, PieceKind::Pawn);
        assert!(matches!(
            GameState::from_pieces([(40, pawn), (40, pawn)], Color::Light),
            Err(ChessError::InvalidSquare(_))
        ));
    }

    #[test]
    fn get_fen_reports_placement_only() {
        assert_eq!(
            GameState::new_game().get_fen(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }
}
