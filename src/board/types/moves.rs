//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::Board;

/// A fully annotated move.
///
/// Besides origin and destination a move records which piece moved, what it
/// captured, what it promotes to and the set of squares giving check to the
/// enemy king once the move is played. Two moves are equal iff all of these
/// agree; since the check squares are a set, their discovery order is
/// irrelevant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    color: Color,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    promotion: Option<Piece>,
    checks: Bitboard,
}

impl Move {
    /// Create a quiet move with no capture, promotion or check annotation.
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece, from: Square, to: Square) -> Self {
        Move {
            color,
            piece,
            from,
            to,
            captured: None,
            promotion: None,
            checks: Bitboard::EMPTY,
        }
    }

    /// Record the kind of the captured piece (a pawn for en passant).
    #[inline]
    #[must_use]
    pub const fn with_capture(mut self, captured: Option<Piece>) -> Self {
        self.captured = captured;
        self
    }

    /// Record the promotion kind.
    ///
    /// # Panics
    /// Panics if `piece` is a pawn or a king; no move can promote to those.
    #[inline]
    #[must_use]
    pub fn with_promotion(mut self, piece: Piece) -> Self {
        assert!(
            piece.is_promotable(),
            "cannot promote to a {piece} ({}{})",
            self.from,
            self.to
        );
        self.promotion = Some(piece);
        self
    }

    /// Record the squares attacking the enemy king after this move.
    #[inline]
    #[must_use]
    pub const fn with_checks(mut self, checks: Bitboard) -> Self {
        self.checks = checks;
        self
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Squares attacking the opponent's king once this move is played.
    #[inline]
    #[must_use]
    pub const fn checks(self) -> Bitboard {
        self.checks
    }

    #[inline]
    #[must_use]
    pub const fn gives_check(self) -> bool {
        !self.checks.is_empty()
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this move is castling: a king travelling two files.
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.piece, Piece::King) && self.from.1.abs_diff(self.to.1) == 2
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.is_castling() && self.to.1 > self.from.1
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        self.is_castling() && self.to.1 < self.from.1
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.piece, Piece::Pawn) && self.from.0.abs_diff(self.to.0) == 2
    }

    /// Returns true if this is an en passant capture on `board`: a pawn
    /// moving diagonally onto the board's empty en passant target.
    #[must_use]
    pub fn is_en_passant_on(self, board: &Board) -> bool {
        matches!(self.piece, Piece::Pawn)
            && self.from.1 != self.to.1
            && board.en_passant_target() == Some(self.to)
            && board.piece_at(self.to).is_none()
    }

    /// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
    #[must_use]
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {} {}{}",
            self.color,
            self.piece,
            self.from,
            self.to
        )?;
        if let Some(captured) = self.captured {
            write!(f, " x{captured}")?;
        }
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.gives_check() {
            write!(f, " checks {:?}", self.checks)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Typical upper bound on legal moves in a position, used as initial capacity.
const MOVE_LIST_CAPACITY: usize = 64;

/// Ordered list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MOVE_LIST_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_uci_display() {
        let mv = Move::new(Color::White, Piece::Pawn, sq("e2"), sq("e4"));
        assert_eq!(mv.to_uci(), "e2e4");
        let promo = Move::new(Color::Black, Piece::Pawn, sq("b2"), sq("a1"))
            .with_capture(Some(Piece::Rook))
            .with_promotion(Piece::Knight);
        assert_eq!(promo.to_string(), "b2a1n");
    }

    #[test]
    fn test_equality_includes_annotations() {
        let base = Move::new(Color::White, Piece::Rook, sq("a1"), sq("a8"));
        let capture = base.with_capture(Some(Piece::Queen));
        let check = base.with_checks(Bitboard::from_square(sq("a8")));
        assert_ne!(base, capture);
        assert_ne!(base, check);
        assert_eq!(check, base.with_checks(Bitboard::from_square(sq("a8"))));
    }

    #[test]
    fn test_move_classification() {
        let castle = Move::new(Color::White, Piece::King, sq("e1"), sq("g1"));
        assert!(castle.is_castling());
        assert!(castle.is_castle_kingside());
        let long = Move::new(Color::Black, Piece::King, sq("e8"), sq("c8"));
        assert!(long.is_castle_queenside());
        let step = Move::new(Color::White, Piece::King, sq("e1"), sq("f1"));
        assert!(!step.is_castling());
        let push = Move::new(Color::Black, Piece::Pawn, sq("d7"), sq("d5"));
        assert!(push.is_double_pawn_push());
        assert!(!push.is_capture());
    }

    #[test]
    fn test_en_passant_detection() {
        let board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let ep = Move::new(Color::White, Piece::Pawn, sq("e5"), sq("d6")).with_capture(Some(Piece::Pawn));
        assert!(ep.is_en_passant_on(&board));
        let push = Move::new(Color::White, Piece::Pawn, sq("e5"), sq("e6"));
        assert!(!push.is_en_passant_on(&board));
        let king = Move::new(Color::White, Piece::King, sq("e1"), sq("d2"));
        assert!(!king.is_en_passant_on(&board));

        let stale = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2");
        assert!(!ep.is_en_passant_on(&stale));
    }

    #[test]
    #[should_panic(expected = "cannot promote")]
    fn test_promotion_to_king_panics() {
        let _ = Move::new(Color::White, Piece::Pawn, sq("a7"), sq("a8")).with_promotion(Piece::King);
    }

    #[test]
    fn test_move_list_basics() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::new(Color::White, Piece::Knight, sq("g1"), sq("f3"));
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert_eq!(list.first(), Some(mv));
        assert!(list.contains(&mv));
        assert_eq!(list.into_iter().count(), 1);
    }
}
