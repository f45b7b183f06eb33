//! Zobrist hashing for chess positions.
//!
//! The key covers exactly what the mini-FEN covers: piece placement, side to
//! move, castling flags and the en-passant target square. It identifies
//! positions for threefold repetition.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

const ZOBRIST_SEED: u64 = 1234567890;

pub(crate) struct ZobristKeys {
    // piece_keys[piece][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // one key per castling flag bit
    pub(crate) castling_keys: [u64; 4],
    // en_passant_keys[square_index]
    pub(crate) en_passant_keys: [u64; 64],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 4];
        let mut en_passant_keys = [0; 64];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash a position from scratch.
pub(crate) fn position_key(
    squares: &[[Option<(Color, Piece)>; 8]; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> u64 {
    let keys = &*ZOBRIST;
    let mut hash = 0;

    for sq in Square::all() {
        if let Some((color, piece)) = squares[sq.0][sq.1] {
            hash ^= keys.piece_keys[piece.index()][color.index()][sq.as_index()];
        }
    }

    if side_to_move == Color::Black {
        hash ^= keys.black_to_move_key;
    }

    let rights = castling_rights.as_u8();
    for (bit, key) in keys.castling_keys.iter().enumerate() {
        if rights & (1 << bit) != 0 {
            hash ^= key;
        }
    }

    if let Some(ep) = en_passant_target {
        hash ^= keys.en_passant_keys[ep.as_index()];
    }

    hash
}
