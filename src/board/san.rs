//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the standard human-readable chess notation used in scoresheets,
//! books, and GUIs. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chess_rules::board::Board;
//!
//! let board = Board::new();
//! let mv = board.parse_san("e4").unwrap();
//! assert_eq!(board.move_to_san(&mv), "e4");
//! ```

use super::attacks::attackers_of;
use super::error::SanError;
use super::types::{file_from_char, rank_from_char};
use super::{Board, Move, Piece, Square};
use crate::logging::rules_log;

/// Origin hints written between the piece letter and the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct OriginHint {
    file: Option<usize>,
    rank: Option<usize>,
}

impl OriginHint {
    fn matches(self, sq: Square) -> bool {
        self.file.map_or(true, |f| f == sq.1) && self.rank.map_or(true, |r| r == sq.0)
    }
}

impl Board {
    /// Format a move in Standard Algebraic Notation.
    ///
    /// Returns notation like "e4", "Nf3", "Bxc6+", "O-O-O", "e8=Q#"
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        let mut san = String::new();

        if mv.is_castle_kingside() {
            san.push_str("O-O");
        } else if mv.is_castle_queenside() {
            san.push_str("O-O-O");
        } else {
            match mv.piece().san_letter() {
                Some(letter) => {
                    san.push(letter);
                    san.push_str(&self.disambiguation(mv));
                }
                None if mv.is_capture() => san.push(mv.from().file_char()),
                None => {}
            }

            if mv.is_capture() {
                san.push('x');
            }

            san.push_str(&mv.to().to_string());

            if let Some(promo) = mv.promotion().and_then(Piece::san_letter) {
                san.push('=');
                san.push(promo);
            }
        }

        if mv.gives_check() {
            if self.apply_move(mv).is_checkmate() {
                san.push('#');
            } else {
                san.push('+');
            }
        }

        san
    }

    /// Origin text needed to tell `mv` apart from other pieces of the same
    /// kind and color that could reach its destination.
    ///
    /// Rivals are found geometrically (knight jumps, unblocked lines), so a
    /// pinned rival still forces disambiguation.
    fn disambiguation(&self, mv: &Move) -> String {
        let from = mv.from();
        let rivals: Vec<Square> = attackers_of(&self.squares, mv.to(), mv.color())
            .iter()
            .filter(|&sq| sq != from && self.piece_at(sq) == Some((mv.color(), mv.piece())))
            .collect();

        if rivals.is_empty() {
            String::new()
        } else if rivals.iter().all(|sq| sq.1 != from.1) {
            from.file_char().to_string()
        } else if rivals.iter().all(|sq| sq.0 != from.0) {
            from.rank_char().to_string()
        } else {
            from.to_string()
        }
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Accepts notation like "e4", "Nf3", "Bxc6", "O-O", "e8=Q" or "e8Q",
    /// with optional check indicators (+, #). An `x` only matches captures;
    /// its absence does not rule them out.
    pub fn parse_san(&self, san: &str) -> Result<Move, SanError> {
        let san = san.trim();
        let body = san.trim_end_matches(['+', '#']);
        if body.is_empty() {
            return Err(SanError::Empty);
        }

        match body {
            "O-O" | "0-0" => return self.find_castling_move(true, san),
            "O-O-O" | "0-0-0" => return self.find_castling_move(false, san),
            _ => {}
        }

        let mut chars: Vec<char> = body.chars().collect();

        let piece = match chars.first() {
            Some(&c) if c.is_ascii_uppercase() => {
                chars.remove(0);
                Piece::from_char(c).ok_or(SanError::InvalidPiece { char: c })?
            }
            _ => Piece::Pawn,
        };

        let promotion = match chars.last() {
            Some(&c) if c.is_ascii_alphabetic() && !matches!(c, 'a'..='h') => {
                chars.pop();
                if chars.last() == Some(&'=') {
                    chars.pop();
                }
                match Piece::from_char(c) {
                    Some(p) if p.is_promotable() => Some(p),
                    _ => return Err(SanError::InvalidPromotion { char: c }),
                }
            }
            _ => None,
        };

        if chars.len() < 2 {
            return Err(SanError::InvalidSquare {
                notation: body.to_string(),
            });
        }
        let dest_text: String = chars.split_off(chars.len() - 2).into_iter().collect();
        let dest: Square = dest_text
            .parse()
            .map_err(|_| SanError::InvalidSquare { notation: dest_text })?;

        let capture = chars.last() == Some(&'x');
        if capture {
            chars.pop();
        }

        let hint = parse_hint(&chars)?;
        self.find_san_move(piece, dest, hint, capture, promotion, san)
    }

    /// Parse a SAN move and apply it in one call.
    pub fn apply_san(&self, san: &str) -> Result<Board, SanError> {
        let mv = self.parse_san(san)?;
        Ok(self.apply_move(&mv))
    }

    fn find_castling_move(&self, kingside: bool, san: &str) -> Result<Move, SanError> {
        let no_match = || SanError::NoMatchingMove {
            san: san.to_string(),
        };
        let king = self
            .king_square(self.side_to_move)
            .ok_or_else(no_match)?;
        let moves = self.king_moves(king).map_err(|_| no_match())?;
        moves
            .iter()
            .find(|mv| {
                if kingside {
                    mv.is_castle_kingside()
                } else {
                    mv.is_castle_queenside()
                }
            })
            .copied()
            .ok_or_else(no_match)
    }

    fn find_san_move(
        &self,
        piece: Piece,
        dest: Square,
        hint: OriginHint,
        capture: bool,
        promotion: Option<Piece>,
        san: &str,
    ) -> Result<Move, SanError> {
        let mut matching: Vec<Move> = Vec::new();

        for (from, p) in self.pieces(self.side_to_move) {
            if p != piece || !hint.matches(from) {
                continue;
            }
            let Ok(moves) = self.legal_moves_from(from) else {
                continue;
            };
            matching.extend(moves.iter().copied().filter(|mv| {
                mv.to() == dest
                    && mv.promotion() == promotion
                    && !mv.is_castling()
                    && (!capture || mv.is_capture())
            }));
        }

        match matching.as_slice() {
            [mv] => Ok(*mv),
            [] => {
                rules_log!(debug, "no legal move matches SAN {:?}", san);
                Err(SanError::NoMatchingMove {
                    san: san.to_string(),
                })
            }
            _ => Err(SanError::AmbiguousMove {
                san: san.to_string(),
            }),
        }
    }
}

fn parse_hint(chars: &[char]) -> Result<OriginHint, SanError> {
    let invalid = || SanError::InvalidDisambiguation {
        notation: chars.iter().collect(),
    };
    match *chars {
        [] => Ok(OriginHint::default()),
        [c] => match (file_from_char(c), rank_from_char(c)) {
            (Some(file), _) => Ok(OriginHint {
                file: Some(file),
                rank: None,
            }),
            (None, Some(rank)) => Ok(OriginHint {
                file: None,
                rank: Some(rank),
            }),
            (None, None) => Err(invalid()),
        },
        [f, r] => match (file_from_char(f), rank_from_char(r)) {
            (Some(file), Some(rank)) => Ok(OriginHint {
                file: Some(file),
                rank: Some(rank),
            }),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}
