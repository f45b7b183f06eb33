//! The immutable board value.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::{BoardBuilder, CastlingRights, Color, GameResult, MaterialCount, Piece, Square};
use crate::zobrist::position_key;

/// 8x8 mailbox indexed `[rank][file]`.
pub(crate) type Grid = [[Option<(Color, Piece)>; 8]; 8];

pub(crate) const EMPTY_GRID: Grid = [[None; 8]; 8];

/// Occurrence counts per position key since the last irreversible move.
///
/// Shared copy-on-write: cloning a board or seeding a builder does not copy
/// the map until one side records a new position.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: Arc<HashMap<u64, u8>>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable::default()
    }

    /// A table holding a single occurrence of `key`.
    pub(crate) fn single(key: u64) -> Self {
        let mut table = RepetitionTable::new();
        table.increment(key);
        table
    }

    pub(crate) fn get(&self, key: u64) -> u8 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: u64) -> u8 {
        let counts = Arc::make_mut(&mut self.counts);
        let count = counts.entry(key).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub(crate) fn clear(&mut self) {
        self.counts = Arc::default();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.counts.len()
    }
}

/// A chess position together with its game-state bookkeeping.
///
/// Boards are immutable once built: every transformation
/// ([`Board::apply_move`], [`BoardBuilder::build`]) yields a new value.
/// Material counts and king locations are computed on first use and cached
/// for the lifetime of the value.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u8,
    pub(crate) fullmove_number: u16,
    pub(crate) hash: u64,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) result: GameResult,
    material: OnceCell<MaterialCount>,
    kings: OnceCell<[Option<Square>; 2]>,
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::starting_position().build()
    }

    /// Assemble a board from raw parts. Caches start empty and the position
    /// key is computed here; without a repetition table the position is
    /// recorded once.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        squares: Grid,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u8,
        fullmove_number: u16,
        repetition_counts: Option<RepetitionTable>,
        result: GameResult,
    ) -> Self {
        let hash = position_key(&squares, side_to_move, castling_rights, en_passant_target);
        let repetition_counts = repetition_counts.unwrap_or_else(|| RepetitionTable::single(hash));
        Board {
            squares,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            hash,
            repetition_counts,
            result,
            material: OnceCell::new(),
            kings: OnceCell::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Every occupied square of `color`, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.result.is_checkmate()
    }

    /// Zobrist key of placement, side to move, castling flags and en-passant square.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// How often the current position occurred since the last pawn move,
    /// capture or castling-rights change.
    #[must_use]
    pub fn repetition_count(&self) -> u8 {
        self.repetition_counts.get(self.hash)
    }

    /// Material on the board, counted once per board value.
    #[must_use]
    pub fn material(&self) -> &MaterialCount {
        self.material
            .get_or_init(|| MaterialCount::from_grid(&self.squares))
    }

    /// Location of the king of `color`, found once per board value.
    ///
    /// With several kings of one color the first in a1..h8 scan order wins;
    /// with none the result is `None`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings.get_or_init(|| {
            [
                find_king(&self.squares, Color::White),
                find_king(&self.squares, Color::Black),
            ]
        })[color.index()]
    }

    /// True for the standard initial position at move one.
    #[must_use]
    pub fn is_initial_position(&self) -> bool {
        self.fullmove_number == 1 && self.mini_fen() == Board::new().mini_fen()
    }
}

/// First king of `color` in a1..h8 scan order.
pub(crate) fn find_king(squares: &Grid, color: Color) -> Option<Square> {
    Square::all().find(|sq| squares[sq.0][sq.1] == Some((color, Piece::King)))
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board<{}>", self.to_fen())
    }
}
