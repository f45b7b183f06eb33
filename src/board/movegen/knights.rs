use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Board, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        for (dr, df) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                occupant => {
                    let mv = Move::new(color, Piece::Knight, from, to)
                        .with_capture(occupant.map(|(_, piece)| piece));
                    self.push_if_legal(moves, mv);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_corner_knight() {
        let board = Board::from_fen("4k3/8/8/8/8/8/7P/N3K3 w - - 0 1");
        assert_eq!(board.knight_moves(sq("a1")).unwrap().len(), 2);
    }

    #[test]
    fn test_centre_knight_with_capture() {
        let board = Board::from_fen("4k3/8/5p2/8/4N3/8/3P4/4K3 w - - 0 1");
        let moves = board.knight_moves(sq("e4")).unwrap();
        // Eight targets minus d2 (own pawn).
        assert_eq!(moves.len(), 7);
        let capture = moves.iter().find(|m| m.to() == sq("f6")).unwrap();
        assert_eq!(capture.captured(), Some(Piece::Pawn));
    }

    #[test]
    fn test_pinned_knight_cannot_move() {
        let board = Board::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(board.knight_moves(sq("e2")).unwrap().is_empty());
    }
}
