//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Four independent castling flags: white/black, kingside/queenside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        let bit = Self::bit_for(color, kingside);
        self.0 & bit != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value (for Zobrist hashing)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Parse the FEN castling field: `-` or any non-repeating subset of `KQkq`.
    #[must_use]
    pub(crate) fn from_fen_field(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(CastlingRights::none());
        }
        if field.is_empty() {
            return None;
        }
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            let bit = match c {
                'K' => CASTLE_WHITE_K,
                'Q' => CASTLE_WHITE_Q,
                'k' => CASTLE_BLACK_K,
                'q' => CASTLE_BLACK_Q,
                _ => return None,
            };
            if rights.0 & bit != 0 {
                return None;
            }
            rights.0 |= bit;
        }
        Some(rights)
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN field form: `KQkq` order, or `-` when empty.
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Corner square of the rook tied to a castling right.
#[inline]
#[must_use]
pub(crate) const fn rook_corner(color: Color, kingside: bool) -> Square {
    Square(color.back_rank(), if kingside { 7 } else { 0 })
}

/// The castling right (if any) whose rook starts on `sq`.
#[inline]
#[must_use]
pub(crate) fn right_for_corner(sq: Square) -> Option<(Color, bool)> {
    match (sq.0, sq.1) {
        (0, 7) => Some((Color::White, true)),
        (0, 0) => Some((Color::White, false)),
        (7, 7) => Some((Color::Black, true)),
        (7, 0) => Some((Color::Black, false)),
        _ => None,
    }
}
