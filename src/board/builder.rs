//! Fluent builder for constructing chess positions.
//!
//! The builder exclusively owns its working position. It can start empty,
//! from the initial position, or from a copy of an existing board, and
//! [`BoardBuilder::build`] consumes it to produce a new immutable [`Board`]
//! with fresh caches.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/P7/4K3 w - - 0 1");
//! ```

use super::state::{Grid, RepetitionTable, EMPTY_GRID};
use super::{Board, CastlingRights, Color, GameResult, Move, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pub(crate) squares: Grid,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u8,
    fullmove_number: u16,
    pub(crate) repetition_counts: Option<RepetitionTable>,
    result: GameResult,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            squares: EMPTY_GRID,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition_counts: None,
            result: GameResult::InProgress,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            builder.squares[0][file] = Some((Color::White, piece));
            builder.squares[1][file] = Some((Color::White, Piece::Pawn));
            builder.squares[6][file] = Some((Color::Black, Piece::Pawn));
            builder.squares[7][file] = Some((Color::Black, piece));
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Copy every field of `board`, including its repetition history and
    /// result. Derived caches are not copied.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        BoardBuilder {
            squares: board.squares,
            side_to_move: board.side_to_move,
            castling_rights: board.castling_rights,
            en_passant_target: board.en_passant_target,
            halfmove_clock: board.halfmove_clock,
            fullmove_number: board.fullmove_number,
            repetition_counts: Some(board.repetition_counts.clone()),
            result: board.result,
        }
    }

    /// Place a piece on the board, replacing any occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.set_piece(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.set_piece(square, None);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u8) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u16) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Set the result tag carried by the built board.
    #[must_use]
    pub const fn result(mut self, result: GameResult) -> Self {
        self.result = result;
        self
    }

    /// Forget any copied repetition history; the built board records its
    /// own position once.
    #[must_use]
    pub fn reset_repetitions(mut self) -> Self {
        self.repetition_counts = None;
        self
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<(Color, Piece)>) {
        self.squares[square.0][square.1] = piece;
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.0][square.1]
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn castling_rights_mut(&mut self) -> &mut CastlingRights {
        &mut self.castling_rights
    }

    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    pub(crate) fn set_counters(&mut self, halfmove_clock: u8, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Move the pieces of `mv`: promotion replaces the pawn, en passant
    /// removes the bypassed pawn, castling relocates the rook. Counters,
    /// rights and turn are left untouched.
    pub(crate) fn place_move(&mut self, mv: &Move) {
        let (from, to) = (mv.from(), mv.to());

        if mv.piece() == Piece::Pawn && from.1 != to.1 && self.piece_at(to).is_none() {
            self.set_piece(Square(from.0, to.1), None);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = if mv.is_castle_kingside() {
                (Square(from.0, 7), Square(from.0, 5))
            } else {
                (Square(from.0, 0), Square(from.0, 3))
            };
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        self.set_piece(from, None);
        let placed = mv.promotion().unwrap_or(mv.piece());
        self.set_piece(to, Some((mv.color(), placed)));
    }

    /// Build the board.
    ///
    /// Consumes the builder. The position key is computed and, unless a
    /// repetition history was copied in, recorded once.
    ///
    /// The position is not classified: the board carries the tag set with
    /// [`BoardBuilder::result`], [`GameResult::InProgress`] by default. Only
    /// FEN decoding and [`Board::apply_move`] compute the result, so round
    /// trip through [`Board::to_fen`] to classify a built position.
    #[must_use]
    pub fn build(self) -> Board {
        Board::from_parts(
            self.squares,
            self.side_to_move,
            self.castling_rights,
            self.en_passant_target,
            self.halfmove_clock,
            self.fullmove_number,
            self.repetition_counts,
            self.result,
        )
    }
}
