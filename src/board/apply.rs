//! Move application and game-result classification.

use super::types::right_for_corner;
use super::{
    Board, BoardBuilder, CastlingRights, Color, GameResult, Move, Piece, Square,
    FIFTY_MOVE_HALFMOVE_LIMIT, THREEFOLD_REPETITION_COUNT,
};
use crate::logging::rules_log;

impl Board {
    /// Play `mv` and return the resulting board.
    ///
    /// `mv` should come from this board's move generator (see
    /// [`Board::is_legal_move`]); applying anything else gives an
    /// unspecified but memory-safe position.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> Board {
        debug_assert_eq!(
            self.piece_at(mv.from()),
            Some((mv.color(), mv.piece())),
            "{mv:?} does not match the piece on its origin"
        );

        let mover = mv.color();
        let mut next = BoardBuilder::from_board(self);
        next.place_move(mv);

        let irreversible = mv.piece() == Piece::Pawn || mv.is_capture();
        let halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        let fullmove_number = match mover {
            Color::White => self.fullmove_number,
            Color::Black => self.fullmove_number.saturating_add(1),
        };
        next.set_counters(halfmove_clock, fullmove_number);

        let en_passant_target = mv
            .is_double_pawn_push()
            .then(|| Square((mv.from().0 + mv.to().0) / 2, mv.from().1));
        next.set_en_passant_target(en_passant_target);
        next.set_side_to_move(mover.opponent());

        let rights = revoke_castling_rights(self.castling_rights, mv);
        *next.castling_rights_mut() = rights;

        let mut repetitions = self.repetition_counts.clone();
        if irreversible || rights != self.castling_rights {
            repetitions.clear();
        }
        next.repetition_counts = Some(repetitions);

        let mut board = next.result(GameResult::InProgress).build();
        let count = board.repetition_counts.increment(board.hash);
        board.result = board.classify_result(count);
        board
    }

    /// Result of this position, as if the side not to move just moved and
    /// the position has now occurred `repetitions` times.
    ///
    /// Priority: threefold repetition, fifty-move rule, checkmate or
    /// stalemate, insufficient material.
    pub(crate) fn classify_result(&self, repetitions: u8) -> GameResult {
        let result = if repetitions >= THREEFOLD_REPETITION_COUNT {
            GameResult::DrawByThreefoldRepetition
        } else if self.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
            GameResult::DrawByFiftyMoveRule
        } else if !self.has_legal_move() {
            if self.is_in_check(self.side_to_move) {
                GameResult::checkmate_by(self.side_to_move.opponent())
            } else {
                GameResult::DrawByStalemate
            }
        } else if self.material().is_insufficient() {
            GameResult::DrawByInsufficientMaterial
        } else {
            GameResult::InProgress
        };

        if result.is_terminal() {
            rules_log!(debug, "game over: {} in {}", result, self.to_fen());
        }
        result
    }
}

/// King moves drop both rights of the mover; a rook leaving its corner, or
/// captured on it, drops that corner's right.
fn revoke_castling_rights(mut rights: CastlingRights, mv: &Move) -> CastlingRights {
    if mv.piece() == Piece::King {
        rights.remove_color(mv.color());
    }
    if mv.piece() == Piece::Rook {
        if let Some((color, kingside)) = right_for_corner(mv.from()) {
            if color == mv.color() {
                rights.remove(color, kingside);
            }
        }
    }
    if mv.captured() == Some(Piece::Rook) {
        if let Some((color, kingside)) = right_for_corner(mv.to()) {
            if color != mv.color() {
                rights.remove(color, kingside);
            }
        }
    }
    rights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn play(board: &Board, uci: &str) -> Board {
        board.apply_uci(uci).unwrap()
    }

    #[test]
    fn test_counters_and_turn() {
        let board = Board::new();
        let after_e4 = play(&board, "e2e4");
        assert_eq!(after_e4.side_to_move(), Color::Black);
        assert_eq!(after_e4.halfmove_clock(), 0);
        assert_eq!(after_e4.fullmove_number(), 1);
        assert_eq!(after_e4.en_passant_target(), Some(sq("e3")));

        let after_nf6 = play(&after_e4, "g8f6");
        assert_eq!(after_nf6.halfmove_clock(), 1);
        assert_eq!(after_nf6.fullmove_number(), 2);
        assert_eq!(after_nf6.en_passant_target(), None);
    }

    #[test]
    fn test_original_board_is_untouched() {
        let board = Board::new();
        let fen = board.to_fen();
        let _ = play(&board, "e2e4");
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.repetition_count(), 1);
    }

    #[test]
    fn test_en_passant_removes_pawn() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        assert!(board.parse_uci("e5d6").unwrap().is_en_passant_on(&board));
        let next = play(&board, "e5d6");
        assert_eq!(next.piece_at(sq("d5")), None);
        assert_eq!(next.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn test_castling_moves_rook_and_revokes_rights() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let next = play(&board, "e1g1");
        assert_eq!(next.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
        assert_eq!(next.piece_at(sq("h1")), None);
        assert_eq!(next.castling_rights().to_string(), "kq");

        let next = play(&next, "e8c8");
        assert_eq!(next.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
        assert_eq!(next.piece_at(sq("a8")), None);
        assert_eq!(next.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_rook_move_revokes_one_side() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let next = play(&board, "a1a2");
        assert_eq!(next.castling_rights().to_string(), "Kkq");
    }

    #[test]
    fn test_rook_capture_revokes_victims_right() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let next = play(&board, "h1h8");
        assert_eq!(next.castling_rights().to_string(), "Qq");
    }

    #[test]
    fn test_repetition_reset_on_irreversible_moves() {
        let board = Board::new();
        let a = play(&play(&board, "g1f3"), "g8f6");
        let b = play(&play(&a, "f3g1"), "f6g8");
        assert_eq!(b.repetition_count(), 2);
        let c = play(&b, "e2e4");
        assert_eq!(c.repetition_count(), 1);
        assert_eq!(c.repetition_counts.len(), 1);
    }

    #[test]
    fn test_threefold_repetition() {
        let mut board = Board::new();
        for _ in 0..2 {
            for uci in ["g1f3", "g8f6", "f3g1", "f6g8"] {
                board = play(&board, uci);
            }
        }
        assert_eq!(board.repetition_count(), 3);
        assert_eq!(board.result(), GameResult::DrawByThreefoldRepetition);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_checkmate_is_credited_to_the_mover() {
        let board = Board::new();
        let mut board = board;
        for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            board = play(&board, uci);
        }
        assert_eq!(board.result(), GameResult::BlackWinsByCheckmate);
        assert!(board.is_checkmate());
        assert!(!board.has_legal_move());
    }

    #[test]
    fn test_fifty_move_rule() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 49 60");
        let next = play(&board, "a1a2");
        assert_eq!(next.halfmove_clock(), 50);
        assert_eq!(next.result(), GameResult::DrawByFiftyMoveRule);
    }

    #[test]
    fn test_capture_into_insufficient_material() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
        let next = play(&board, "e1d2");
        assert_eq!(next.result(), GameResult::DrawByInsufficientMaterial);
    }
}
