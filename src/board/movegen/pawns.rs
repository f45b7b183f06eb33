use super::super::{Board, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(super) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();

        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            self.push_pawn_move(moves, Move::new(color, Piece::Pawn, from, forward));
            if from.0 == color.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        self.push_if_legal(moves, Move::new(color, Piece::Pawn, from, double));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(target) {
                Some((target_color, captured)) if target_color != color => {
                    let mv = Move::new(color, Piece::Pawn, from, target).with_capture(Some(captured));
                    self.push_pawn_move(moves, mv);
                }
                Some(_) => {}
                None if Some(target) == self.en_passant_target => {
                    // The bypassed pawn stands beside us on the target's file.
                    let victim = Square(from.0, target.1);
                    if self.piece_at(victim) == Some((color.opponent(), Piece::Pawn)) {
                        let mv = Move::new(color, Piece::Pawn, from, target)
                            .with_capture(Some(Piece::Pawn));
                        self.push_if_legal(moves, mv);
                    }
                }
                None => {}
            }
        }
    }

    /// Pushes `mv`, expanded into the four promotions when it reaches the last rank.
    fn push_pawn_move(&self, moves: &mut MoveList, mv: Move) {
        if mv.to().0 == mv.color().pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                self.push_if_legal(moves, mv.with_promotion(promo));
            }
        } else {
            self.push_if_legal(moves, mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_and_double_push() {
        let board = Board::new();
        let moves = board.pawn_moves(sq("e2")).unwrap();
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![sq("e3"), sq("e4")]);
    }

    #[test]
    fn test_double_push_blocked() {
        let board = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert_eq!(board.pawn_moves(sq("e2")).unwrap().len(), 1);
        let board = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        assert!(board.pawn_moves(sq("e2")).unwrap().is_empty());
    }

    #[test]
    fn test_promotions_in_order() {
        let board = Board::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let moves = board.pawn_moves(sq("a7")).unwrap();
        let promos: Vec<Option<Piece>> = moves.iter().map(|m| m.promotion()).collect();
        assert_eq!(
            promos,
            vec![
                Some(Piece::Knight),
                Some(Piece::Bishop),
                Some(Piece::Rook),
                Some(Piece::Queen)
            ]
        );
    }

    #[test]
    fn test_capture_promotions() {
        let board = Board::from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1");
        let moves = board.pawn_moves(sq("a7")).unwrap();
        assert_eq!(moves.len(), 8);
        assert_eq!(
            moves.iter().filter(|m| m.captured() == Some(Piece::Rook)).count(),
            4
        );
    }

    #[test]
    fn test_en_passant_capture() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let moves = board.pawn_moves(sq("e5")).unwrap();
        let ep = moves.iter().find(|m| m.to() == sq("d6")).unwrap();
        assert_eq!(ep.captured(), Some(Piece::Pawn));
        assert_eq!(ep.color(), Color::White);
    }

    #[test]
    fn test_en_passant_exposing_king_is_illegal() {
        // Removing both pawns from rank 5 would open the rook on a5 onto the king on h5.
        let board = Board::from_fen("4k3/8/8/r2pP2K/8/8/8/8 w - d6 0 2");
        let moves = board.pawn_moves(sq("e5")).unwrap();
        assert!(moves.iter().all(|m| m.to() != sq("d6")));
    }
}
