mod logging;

pub mod board;
mod perft;
mod zobrist;

pub use board::{Board, Color, GameResult, Move, Piece, Square};
