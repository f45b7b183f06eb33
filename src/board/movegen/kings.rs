use super::super::attacks::{attackers_of, KING_OFFSETS};
use super::super::types::rook_corner;
use super::super::{Board, BoardBuilder, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;

        for (dr, df) in KING_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            if self.next_to_enemy_king(to) {
                continue;
            }
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                occupant => {
                    let mv = Move::new(color, Piece::King, from, to)
                        .with_capture(occupant.map(|(_, piece)| piece));
                    self.push_if_legal(moves, mv);
                }
            }
        }

        self.generate_castling_moves(from, moves);
    }

    /// Castling needs the right, king and rook on their home squares, an
    /// empty path between them, a king not in check, and transit and landing
    /// squares that are not attacked.
    fn generate_castling_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let rank = color.back_rank();
        if from != Square(rank, 4) || self.castling_rights.is_empty() {
            return;
        }
        if !attackers_of(&self.squares, from, color.opponent()).is_empty() {
            return;
        }

        for kingside in [true, false] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            if self.piece_at(rook_corner(color, kingside)) != Some((color, Piece::Rook)) {
                continue;
            }
            let mut between = if kingside { 5..7 } else { 1..4 };
            if !between.all(|file| self.is_empty(Square(rank, file))) {
                continue;
            }
            let (transit, landing) = if kingside {
                (Square(rank, 5), Square(rank, 6))
            } else {
                (Square(rank, 3), Square(rank, 2))
            };
            if self.king_unsafe_on(from, transit) || self.king_unsafe_on(from, landing) {
                continue;
            }
            self.push_if_legal(moves, Move::new(color, Piece::King, from, landing));
        }
    }

    /// Would the king on `from` be attacked, or touch the enemy king, standing on `to`?
    fn king_unsafe_on(&self, from: Square, to: Square) -> bool {
        if self.next_to_enemy_king(to) {
            return true;
        }
        let mut probe = BoardBuilder::from_board(self);
        let king = probe.piece_at(from);
        probe.set_piece(from, None);
        probe.set_piece(to, king);
        !probe.checking_squares(self.side_to_move).is_empty()
    }

    fn next_to_enemy_king(&self, sq: Square) -> bool {
        self.king_square(self.side_to_move.opponent())
            .is_some_and(|king| king.0.abs_diff(sq.0) <= 1 && king.1.abs_diff(sq.1) <= 1)
    }
}
