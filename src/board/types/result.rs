//! Game result tags.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u8 = 50;

/// Occurrence count at which a repeated position draws the game.
pub const THREEFOLD_REPETITION_COUNT: u8 = 3;

/// Outcome of a position. Only `InProgress` is non-terminal; no move can be
/// generated from a board with any other result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameResult {
    #[default]
    InProgress,
    WhiteWinsByCheckmate,
    BlackWinsByCheckmate,
    DrawByStalemate,
    DrawByInsufficientMaterial,
    DrawByThreefoldRepetition,
    DrawByFiftyMoveRule,
}

impl GameResult {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    #[inline]
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        matches!(
            self,
            GameResult::WhiteWinsByCheckmate | GameResult::BlackWinsByCheckmate
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_draw(self) -> bool {
        self.is_terminal() && !self.is_checkmate()
    }

    /// The color credited with the win, if any.
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWinsByCheckmate => Some(Color::White),
            GameResult::BlackWinsByCheckmate => Some(Color::Black),
            _ => None,
        }
    }

    /// Checkmate credited to `winner`.
    #[inline]
    #[must_use]
    pub const fn checkmate_by(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWinsByCheckmate,
            Color::Black => GameResult::BlackWinsByCheckmate,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::InProgress => "in_progress",
            GameResult::WhiteWinsByCheckmate => "white_wins_by_checkmate",
            GameResult::BlackWinsByCheckmate => "black_wins_by_checkmate",
            GameResult::DrawByStalemate => "draw_by_stalemate",
            GameResult::DrawByInsufficientMaterial => "draw_by_insufficient_material",
            GameResult::DrawByThreefoldRepetition => "draw_by_threefold_repetition",
            GameResult::DrawByFiftyMoveRule => "draw_by_fifty_move_rule",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
