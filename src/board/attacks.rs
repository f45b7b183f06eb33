//! Attack and check detection on the mailbox grid.

use super::state::{find_king, Grid};
use super::{Bitboard, Board, BoardBuilder, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// First occupied square along a ray from `from` (exclusive), with its occupant.
#[inline]
pub(crate) fn first_blocker(
    squares: &Grid,
    from: Square,
    (dr, df): (isize, isize),
) -> Option<(Square, (Color, Piece))> {
    let mut current = from;
    while let Some(next) = current.offset(dr, df) {
        if let Some(occupant) = squares[next.0][next.1] {
            return Some((next, occupant));
        }
        current = next;
    }
    None
}

/// Squares holding a knight, pawn, bishop, rook or queen of color `by` that
/// attack `target`. Kings are not considered.
pub(crate) fn attackers_of(squares: &Grid, target: Square, by: Color) -> Bitboard {
    let mut attackers = Bitboard::EMPTY;

    for (dr, df) in KNIGHT_OFFSETS {
        if let Some(sq) = target.offset(dr, df) {
            if squares[sq.0][sq.1] == Some((by, Piece::Knight)) {
                attackers.insert(sq);
            }
        }
    }

    // An attacking pawn sits one step behind the target from its own point of view.
    let back = -by.pawn_direction();
    for df in [-1, 1] {
        if let Some(sq) = target.offset(back, df) {
            if squares[sq.0][sq.1] == Some((by, Piece::Pawn)) {
                attackers.insert(sq);
            }
        }
    }

    for dir in DIAGONAL_DIRECTIONS {
        if let Some((sq, (color, piece))) = first_blocker(squares, target, dir) {
            if color == by && piece.attacks_diagonally() {
                attackers.insert(sq);
            }
        }
    }

    for dir in STRAIGHT_DIRECTIONS {
        if let Some((sq, (color, piece))) = first_blocker(squares, target, dir) {
            if color == by && piece.attacks_straight() {
                attackers.insert(sq);
            }
        }
    }

    attackers
}

/// Squares attacking the king of `king_color` on `squares`, empty when the
/// king is safe or absent.
pub(crate) fn checking_squares_on(squares: &Grid, king: Option<Square>, king_color: Color) -> Bitboard {
    match king {
        Some(king) => attackers_of(squares, king, king_color.opponent()),
        None => Bitboard::EMPTY,
    }
}

impl Board {
    /// Squares holding enemy pieces that attack the king of `king_color`.
    ///
    /// Returns the empty set when the king is not in check, and also when
    /// the board has no king of that color.
    #[must_use]
    pub fn checking_squares(&self, king_color: Color) -> Bitboard {
        checking_squares_on(&self.squares, self.king_square(king_color), king_color)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        !self.checking_squares(color).is_empty()
    }

    /// True if a non-king piece of `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        !attackers_of(&self.squares, square, by).is_empty()
    }
}

impl BoardBuilder {
    /// Check detection on the working position, for hypothetical probes.
    pub(crate) fn checking_squares(&self, king_color: Color) -> Bitboard {
        checking_squares_on(&self.squares, find_king(&self.squares, king_color), king_color)
    }
}
