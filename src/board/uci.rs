//! UCI long algebraic move notation (`e2e4`, `e7e8q`).

use super::error::MoveParseError;
use super::{Board, Move, Piece, Square};
use crate::logging::rules_log;

impl Board {
    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_uci("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_uci(&self, uci: &str) -> Result<Move, MoveParseError> {
        let len = uci.chars().count();
        if !(4..=5).contains(&len) || !uci.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c @ ('n' | 'b' | 'r' | 'q')) => Piece::from_char(c),
            Some(c) => return Err(MoveParseError::InvalidPromotion { char: c }),
        };

        let illegal = || {
            rules_log!(debug, "no legal move matches {:?}", uci);
            MoveParseError::IllegalMove {
                notation: uci.to_string(),
            }
        };
        let moves = self.legal_moves_from(from).map_err(|_| illegal())?;
        moves
            .iter()
            .find(|mv| mv.to() == to && mv.promotion() == promotion)
            .copied()
            .ok_or_else(illegal)
    }

    /// Parse a UCI move and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new().apply_uci("e2e4").unwrap().apply_uci("e7e5").unwrap();
    /// assert_eq!(board.fullmove_number(), 2);
    /// ```
    pub fn apply_uci(&self, uci: &str) -> Result<Board, MoveParseError> {
        let mv = self.parse_uci(uci)?;
        Ok(self.apply_move(&mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    #[test]
    fn test_parse_simple_moves() {
        let board = Board::new();
        let mv = board.parse_uci("g1f3").unwrap();
        assert_eq!(mv.piece(), Piece::Knight);
        assert_eq!(mv.color(), Color::White);
        assert_eq!(mv.to_uci(), "g1f3");
    }

    #[test]
    fn test_parse_promotion() {
        let board = Board::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1");
        let mv = board.parse_uci("a7a8n").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Knight));
        assert_eq!(mv.to_uci(), "a7a8n");
        // A promoting pawn move needs its piece letter.
        assert!(matches!(
            board.parse_uci("a7a8"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        let board = Board::new();
        assert_eq!(
            board.parse_uci("e2e"),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            board.parse_uci("e2e4qq"),
            Err(MoveParseError::InvalidLength { len: 6 })
        );
        assert!(matches!(
            board.parse_uci("z2e4"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            board.parse_uci("e2e4k"),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
        assert_eq!(
            board.parse_uci("e2e4Q"),
            Err(MoveParseError::InvalidPromotion { char: 'Q' })
        );
        assert!(matches!(
            board.parse_uci("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.parse_uci("e7e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.parse_uci("e4e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_every_generated_move_round_trips() {
        let board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        for mv in board.legal_moves().iter() {
            assert_eq!(board.parse_uci(&mv.to_uci()).as_ref(), Ok(mv));
        }
    }
}
