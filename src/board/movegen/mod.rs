//! Legal move generation.
//!
//! Each piece kind has its own generator producing candidate moves from one
//! origin. Every candidate passes through [`Board::push_if_legal`], which
//! plays the placement on a scratch builder, drops the move if it leaves the
//! mover's king attacked, and annotates survivors with the squares that
//! check the opponent's king.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::error::MoveGenError;
use super::{Board, BoardBuilder, Move, MoveList, Piece, Square};
use crate::logging::rules_log;

impl Board {
    /// All legal moves for the side to move, grouped by origin in a1..h8 order.
    ///
    /// Empty when the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.is_terminal() {
            return moves;
        }
        for (from, piece) in self.pieces(self.side_to_move) {
            self.generate_for(from, piece, &mut moves);
        }
        moves
    }

    /// Legal moves of the piece on `origin`.
    ///
    /// An empty origin yields an empty list; a piece of the side not to move
    /// is an error.
    pub fn legal_moves_from(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        match self.piece_at(origin) {
            None => Ok(MoveList::new()),
            Some((color, _)) if color != self.side_to_move => {
                rules_log!(debug, "move generation requested for {} piece on {}", color, origin);
                Err(MoveGenError::NotSideToMove {
                    square: origin,
                    color,
                })
            }
            Some((_, piece)) => {
                let mut moves = MoveList::new();
                if !self.is_terminal() {
                    self.generate_for(origin, piece, &mut moves);
                }
                Ok(moves)
            }
        }
    }

    /// Legal moves indexed by origin `[rank][file]`.
    #[must_use]
    pub fn legal_moves_by_square(&self) -> [[MoveList; 8]; 8] {
        let mut by_square: [[MoveList; 8]; 8] = Default::default();
        for mv in self.legal_moves() {
            let from = mv.from();
            by_square[from.0][from.1].push(mv);
        }
        by_square
    }

    /// True if the side to move has at least one legal move. Stops at the
    /// first one found, trying the king first.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        if self.is_terminal() {
            return false;
        }
        let king = self.king_square(self.side_to_move);
        let mut moves = MoveList::new();
        if let Some(king) = king {
            self.generate_for(king, Piece::King, &mut moves);
            if !moves.is_empty() {
                return true;
            }
        }
        for (from, piece) in self.pieces(self.side_to_move) {
            if Some(from) == king {
                continue;
            }
            self.generate_for(from, piece, &mut moves);
            if !moves.is_empty() {
                return true;
            }
        }
        false
    }

    /// True if `mv` is exactly one of the moves the board would generate,
    /// annotations included.
    #[must_use]
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        if mv.color() != self.side_to_move
            || self.piece_at(mv.from()) != Some((mv.color(), mv.piece()))
        {
            return false;
        }
        self.legal_moves_from(mv.from())
            .map(|moves| moves.contains(mv))
            .unwrap_or(false)
    }

    /// Legal pawn moves from `origin`, which must hold a pawn of the side to move.
    pub fn pawn_moves(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        self.moves_for_kind(origin, Piece::Pawn)
    }

    /// Legal knight moves from `origin`, which must hold a knight of the side to move.
    pub fn knight_moves(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        self.moves_for_kind(origin, Piece::Knight)
    }

    /// Legal bishop moves from `origin`, which must hold a bishop of the side to move.
    pub fn bishop_moves(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        self.moves_for_kind(origin, Piece::Bishop)
    }

    /// Legal rook moves from `origin`, which must hold a rook of the side to move.
    pub fn rook_moves(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        self.moves_for_kind(origin, Piece::Rook)
    }

    /// Legal queen moves from `origin`, which must hold a queen of the side to move.
    pub fn queen_moves(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        self.moves_for_kind(origin, Piece::Queen)
    }

    /// Legal king moves, castling included, from `origin`, which must hold a
    /// king of the side to move.
    pub fn king_moves(&self, origin: Square) -> Result<MoveList, MoveGenError> {
        self.moves_for_kind(origin, Piece::King)
    }

    fn moves_for_kind(&self, origin: Square, piece: Piece) -> Result<MoveList, MoveGenError> {
        let mut moves = MoveList::new();
        if self.is_terminal() {
            return Ok(moves);
        }
        let expected = (self.side_to_move, piece);
        let found = self.piece_at(origin);
        if found != Some(expected) {
            rules_log!(debug, "expected {} {} on {}, found {:?}", expected.0, piece, origin, found);
            return Err(MoveGenError::UnexpectedPiece {
                square: origin,
                expected,
                found,
            });
        }
        self.generate_for(origin, piece, &mut moves);
        Ok(moves)
    }

    fn generate_for(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, moves),
            Piece::Knight => self.generate_knight_moves(from, moves),
            Piece::Bishop => self.generate_slider_moves(from, &DIAGONAL_DIRECTIONS, moves),
            Piece::Rook => self.generate_slider_moves(from, &STRAIGHT_DIRECTIONS, moves),
            Piece::Queen => {
                self.generate_slider_moves(from, &DIAGONAL_DIRECTIONS, moves);
                self.generate_slider_moves(from, &STRAIGHT_DIRECTIONS, moves);
            }
            Piece::King => self.generate_king_moves(from, moves),
        }
    }

    /// Keep `mv` if the mover's king is safe afterwards, annotated with the
    /// squares now checking the opponent.
    fn push_if_legal(&self, moves: &mut MoveList, mv: Move) {
        let mut probe = BoardBuilder::from_board(self);
        probe.place_move(&mv);
        if !probe.checking_squares(mv.color()).is_empty() {
            return;
        }
        let checks = probe.checking_squares(mv.color().opponent());
        moves.push(mv.with_checks(checks));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Bitboard, Color};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_position_has_twenty_moves() {
        let board = Board::new();
        assert_eq!(board.legal_moves().len(), 20);
        assert!(board.has_legal_move());
    }

    #[test]
    fn test_legal_moves_from_empty_square() {
        let board = Board::new();
        assert_eq!(board.legal_moves_from(sq("e4")), Ok(MoveList::new()));
    }

    #[test]
    fn test_legal_moves_from_wrong_side() {
        let board = Board::new();
        assert_eq!(
            board.legal_moves_from(sq("e7")),
            Err(MoveGenError::NotSideToMove {
                square: sq("e7"),
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_kind_entry_rejects_other_pieces() {
        let board = Board::new();
        assert!(matches!(
            board.bishop_moves(sq("g1")),
            Err(MoveGenError::UnexpectedPiece { .. })
        ));
        assert!(matches!(
            board.knight_moves(sq("g8")),
            Err(MoveGenError::UnexpectedPiece { .. })
        ));
        assert_eq!(board.knight_moves(sq("g1")).map(|m| m.len()), Ok(2));
    }

    #[test]
    fn test_kind_entry_on_terminal_board_is_empty() {
        let mated = Board::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(mated.is_terminal());
        assert_eq!(mated.knight_moves(sq("a8")), Ok(MoveList::new()));
        assert_eq!(mated.knight_moves(sq("e4")), Ok(MoveList::new()));
        assert_eq!(mated.knight_moves(sq("g1")), Ok(MoveList::new()));
    }

    #[test]
    fn test_moves_by_square() {
        let board = Board::new();
        let by_square = board.legal_moves_by_square();
        assert_eq!(by_square[1][4].len(), 2);
        assert_eq!(by_square[0][1].len(), 2);
        assert!(by_square[0][0].is_empty());
    }

    #[test]
    fn test_check_annotation() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let moves = board.rook_moves(sq("a1")).unwrap();
        let check = moves.iter().find(|m| m.to() == sq("a8")).unwrap();
        assert_eq!(check.checks(), Bitboard::from_square(sq("a8")));
        let quiet = moves.iter().find(|m| m.to() == sq("a7")).unwrap();
        assert!(!quiet.gives_check());
    }

    #[test]
    fn test_discovered_check_annotation() {
        // Moving the knight uncovers the rook on e1.
        let board = Board::from_fen("4k3/8/8/8/8/8/4N3/4RK2 w - - 0 1");
        let moves = board.knight_moves(sq("e2")).unwrap();
        assert!(moves.iter().all(|m| m.checks().contains(sq("e1"))));
    }

    #[test]
    fn test_is_legal_move_requires_exact_match() {
        let board = Board::new();
        let mv = board.legal_moves().first().unwrap();
        assert!(board.is_legal_move(&mv));
        assert!(!board.is_legal_move(&mv.with_checks(Bitboard::from_square(sq("e8")))));
        assert!(!board.is_legal_move(&mv.with_capture(Some(Piece::Queen))));

        let wrong_piece = Move::new(Color::White, Piece::Bishop, sq("g1"), sq("f3"));
        assert!(!board.is_legal_move(&wrong_piece));
        let wrong_side = Move::new(Color::Black, Piece::Pawn, sq("e7"), sq("e5"));
        assert!(!board.is_legal_move(&wrong_side));
    }
}
