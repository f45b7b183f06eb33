//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveList` - annotated moves
//! - `CastlingRights` - castling state
//! - `MaterialCount` - per-side material used by the draw rules
//! - `GameResult` - terminal state tags

mod bitboard;
mod castling;
mod material;
mod moves;
mod piece;
mod result;
mod square;

// Re-export all public types
pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use material::{MaterialCount, SideMaterial};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use result::{GameResult, FIFTY_MOVE_HALFMOVE_LIMIT, THREEFOLD_REPETITION_COUNT};
pub use square::Square;

// Re-export internal utilities
pub(crate) use castling::{right_for_corner, rook_corner};
pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::{file_from_char, rank_from_char};
