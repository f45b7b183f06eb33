//! Chess board representation and game rules.
//!
//! Boards are immutable: playing a move returns a new [`Board`] with its
//! result already classified. Move generation is fully legal and every move
//! carries the squares it checks the opponent's king from.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, GameResult};
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(board.result(), GameResult::InProgress);
//! ```

mod apply;
mod attacks;
mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod types;
mod uci;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveGenError, MoveParseError, SanError, SquareError};
pub use fen::STARTING_FEN;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, GameResult, MaterialCount, Move, MoveList,
    Piece, SideMaterial, Square, FIFTY_MOVE_HALFMOVE_LIMIT, THREEFOLD_REPETITION_COUNT,
};

pub(crate) use types::PROMOTION_PIECES;
