use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Walk each direction until the board edge or the first occupied square,
    /// which is included only when it holds an enemy piece.
    pub(super) fn generate_slider_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => {
                        self.push_if_legal(moves, Move::new(color, piece, from, to));
                    }
                    Some((c, captured)) => {
                        if c != color {
                            let mv = Move::new(color, piece, from, to).with_capture(Some(captured));
                            self.push_if_legal(moves, mv);
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
