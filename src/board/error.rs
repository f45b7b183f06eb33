//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have exactly six space-separated fields
    WrongFieldCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Placement field does not describe exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not an integer in 0..=255
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not an integer in 0..=65535
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} of FEN placement has {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid half-move clock '{found}', expected 0-255")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid full-move number '{found}', expected 0-65535")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for UCI move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Invalid square in SAN
    InvalidSquare { notation: String },
    /// Disambiguation hint that is neither a file, a rank nor a square
    InvalidDisambiguation { notation: String },
    /// Ambiguous move (multiple pieces can reach the target)
    AmbiguousMove { san: String },
    /// No matching legal move found
    NoMatchingMove { san: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in SAN")
            }
            SanError::InvalidSquare { notation } => {
                write!(f, "Invalid square in SAN '{notation}'")
            }
            SanError::InvalidDisambiguation { notation } => {
                write!(f, "Invalid disambiguation '{notation}' in SAN")
            }
            SanError::AmbiguousMove { san } => {
                write!(f, "Ambiguous move '{san}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
            SanError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

/// Error type for move generation precondition failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    /// The origin square does not hold the piece the generator expects
    UnexpectedPiece {
        square: Square,
        expected: (Color, Piece),
        found: Option<(Color, Piece)>,
    },
    /// The origin square holds a piece of the side not to move
    NotSideToMove { square: Square, color: Color },
}

impl fmt::Display for MoveGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenError::UnexpectedPiece {
                square,
                expected: (color, piece),
                found,
            } => {
                write!(f, "Expected {color} {piece} on {square}, found ")?;
                match found {
                    Some((c, p)) => write!(f, "{c} {p}"),
                    None => write!(f, "an empty square"),
                }
            }
            MoveGenError::NotSideToMove { square, color } => {
                write!(f, "Piece on {square} belongs to {color}, who is not to move")
            }
        }
    }
}

impl std::error::Error for MoveGenError {}
