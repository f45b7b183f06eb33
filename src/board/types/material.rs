//! Material counts and the insufficient-material rule.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// Piece counts for one side. Kings are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideMaterial {
    pub pawns: u8,
    pub knights: u8,
    pub light_bishops: u8,
    pub dark_bishops: u8,
    pub rooks: u8,
    pub queens: u8,
}

impl SideMaterial {
    #[inline]
    #[must_use]
    pub const fn bishops(&self) -> u8 {
        self.light_bishops + self.dark_bishops
    }

    fn add(&mut self, piece: Piece, sq: Square) {
        let slot = match piece {
            Piece::Pawn => &mut self.pawns,
            Piece::Knight => &mut self.knights,
            Piece::Bishop if sq.is_light() => &mut self.light_bishops,
            Piece::Bishop => &mut self.dark_bishops,
            Piece::Rook => &mut self.rooks,
            Piece::Queen => &mut self.queens,
            Piece::King => return,
        };
        *slot = slot.saturating_add(1);
    }

    /// No pawn, rook or queen; at most one knight; never knight plus bishop;
    /// never bishops on both square colours.
    fn is_insufficient(&self) -> bool {
        self.pawns == 0
            && self.rooks == 0
            && self.queens == 0
            && self.knights <= 1
            && !(self.knights > 0 && self.bishops() > 0)
            && !(self.light_bishops > 0 && self.dark_bishops > 0)
    }
}

/// Material for both colors, indexed by [`Color`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialCount {
    pub white: SideMaterial,
    pub black: SideMaterial,
}

impl MaterialCount {
    /// Count every piece on a grid.
    pub(crate) fn from_grid(squares: &[[Option<(Color, Piece)>; 8]; 8]) -> Self {
        let mut count = MaterialCount::default();
        for sq in Square::all() {
            if let Some((color, piece)) = squares[sq.0][sq.1] {
                count.side_mut(color).add(piece, sq);
            }
        }
        count
    }

    #[inline]
    #[must_use]
    pub const fn side(&self, color: Color) -> &SideMaterial {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut SideMaterial {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// True when neither side keeps enough material to force mate.
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        self.white.is_insufficient() && self.black.is_insufficient()
    }
}
