//! FEN and mini-FEN codec.

use std::str::FromStr;

use super::error::FenError;
use super::state::{Grid, EMPTY_GRID};
use super::{Board, BoardBuilder, CastlingRights, Color, Piece, Square};
use crate::logging::rules_log;

/// FEN of the standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required. The decoded position is recorded once in
    /// the repetition table and its result is classified as if the side not
    /// to move had just moved.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let board = parse_fen(fen).map_err(|err| {
            rules_log!(debug, "rejected FEN {:?}: {}", fen, err);
            err
        })?;
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(board) => board,
            Err(err) => panic!("invalid FEN {fen:?}: {err}"),
        }
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.mini_fen(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The first four FEN fields: placement, side to move, castling and en
    /// passant. Two boards with equal mini-FEN are the same position for
    /// repetition purposes.
    #[must_use]
    pub fn mini_fen(&self) -> String {
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {}",
            placement_field(&self.squares),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep
        )
    }
}

fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let parts: Vec<&str> = fen.split(' ').collect();
    let [placement, side, castling, ep, halfmove, fullmove] = parts[..] else {
        return Err(FenError::WrongFieldCount { found: parts.len() });
    };

    let squares = parse_placement(placement)?;

    let side_to_move = match side {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    let castling_rights =
        CastlingRights::from_fen_field(castling).ok_or_else(|| FenError::InvalidCastling {
            found: castling.to_string(),
        })?;

    let en_passant_target = if ep == "-" {
        None
    } else {
        Some(
            ep.parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: ep.to_string(),
                })?,
        )
    };

    let halfmove_clock: u8 = halfmove
        .parse()
        .map_err(|_| FenError::InvalidHalfmoveClock {
            found: halfmove.to_string(),
        })?;
    let fullmove_number: u16 = fullmove
        .parse()
        .map_err(|_| FenError::InvalidFullmoveNumber {
            found: fullmove.to_string(),
        })?;

    let mut builder = BoardBuilder::new()
        .side_to_move(side_to_move)
        .castling(castling_rights)
        .halfmove_clock(halfmove_clock)
        .fullmove_number(fullmove_number);
    builder.squares = squares;
    if let Some(target) = en_passant_target {
        builder = builder.en_passant(target);
    }

    let mut board = builder.build();
    board.result = board.classify_result(0);
    Ok(board)
}

/// Ranks are listed from 8 down to 1; digits 1-8 skip empty files.
fn parse_placement(placement: &str) -> Result<Grid, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut squares = EMPTY_GRID;
    for (idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - idx;
        let mut file = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::WrongFileCount {
                        rank: rank + 1,
                        files: file + skip as usize,
                    });
                }
                file += skip as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file < 8 {
                    squares[rank][file] = Some((color, piece));
                }
                file += 1;
            }
            if file > 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }
        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(squares)
}

fn placement_field(squares: &Grid) -> String {
    let mut rows: Vec<String> = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = String::new();
        let mut empty = 0;
        for file in 0..8 {
            if let Some((color, piece)) = squares[rank][file] {
                if empty > 0 {
                    row.push_str(&empty.to_string());
                    empty = 0;
                }
                row.push(piece.to_fen_char(color));
            } else {
                empty += 1;
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        rows.push(row);
    }
    rows.join("/")
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
