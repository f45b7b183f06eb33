//! Edge case tests for special chess positions and moves.

use crate::board::{Board, BoardBuilder, Color, GameResult, Piece, Square};

#[test]
fn test_checkmate_decoded_from_fen() {
    let board = Board::from_fen("k7/1Q6/2K5/8/8/8/8/8 b - - 0 1");
    assert!(board.is_checkmate());
    assert_eq!(board.result(), GameResult::WhiteWinsByCheckmate);
    assert_eq!(board.result().winner(), Some(Color::White));
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_underpromotion_to_knight() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.legal_moves();

    let knight_promo = moves.iter().find(|m| m.promotion() == Some(Piece::Knight));
    assert!(
        knight_promo.is_some(),
        "Knight promotion should be available"
    );

    let next = board.apply_move(knight_promo.unwrap());
    assert_eq!(next.piece_at(Square(7, 0)), Some((Color::White, Piece::Knight)));
}

#[test]
fn test_every_promotion_piece_is_offered() {
    let board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promos: Vec<Piece> = board
        .pawn_moves(Square(6, 0))
        .unwrap()
        .iter()
        .filter_map(|m| m.promotion())
        .collect();
    assert_eq!(
        promos,
        vec![Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
    );
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = board.legal_moves();

    let ep_move = moves
        .iter()
        .find(|m| m.piece() == Piece::Pawn && m.to() == Square(5, 3));
    assert!(ep_move.is_some(), "En passant should be available");

    let mv = ep_move.unwrap();
    assert_eq!(mv.captured(), Some(Piece::Pawn));
    let next = board.apply_move(mv);

    assert!(
        next.piece_at(Square(4, 3)).is_none(),
        "Captured pawn should be removed"
    );
    assert_eq!(
        next.piece_at(Square(5, 3)),
        Some((Color::White, Piece::Pawn)),
        "Capturing pawn should be on d6"
    );
    assert_eq!(
        board.piece_at(Square(4, 3)),
        Some((Color::Black, Piece::Pawn)),
        "Original board is unchanged"
    );
}

#[test]
fn test_en_passant_pinned_pawn() {
    // Capturing would expose the king on the fifth rank.
    let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
    let moves = board.pawn_moves(Square(4, 4)).unwrap();
    assert!(moves.iter().all(|m| m.to() != Square(5, 3)));
}

#[test]
fn test_castling_blocked_by_check() {
    let board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let moves = board.legal_moves();

    let castling_move = moves.iter().find(|m| m.is_castling());
    assert!(
        castling_move.is_none(),
        "Castling should not be available when in check"
    );
}

#[test]
fn test_castling_through_attacked_square() {
    let board = Board::from_fen("r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = board.legal_moves();

    assert!(moves.iter().any(|m| m.is_castle_queenside()));
    assert!(!moves.iter().any(|m| m.is_castle_kingside()));
}

#[test]
fn test_double_check_only_king_can_move() {
    let board = Board::from_fen("4k3/8/8/8/b7/5N2/3r4/3K4 w - - 0 1");
    assert_eq!(board.checking_squares(Color::White).popcount(), 2);
    let moves = board.legal_moves();
    assert!(!moves.is_empty());
    for mv in moves.iter() {
        assert_eq!(
            mv.from(),
            Square(0, 3),
            "Only king should be able to move in double check"
        );
    }
}

#[test]
fn test_pinned_piece_stays_on_line() {
    let board = Board::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
    let moves = board.rook_moves(Square(1, 4)).unwrap();
    assert!(moves.iter().all(|m| m.to().1 == 4));
    assert!(moves.iter().any(|m| m.to() == Square(6, 4)));
}

#[test]
fn test_board_without_kings() {
    let board = BoardBuilder::new()
        .piece(Square(1, 0), Color::White, Piece::Pawn)
        .piece(Square(6, 7), Color::Black, Piece::Pawn)
        .build();
    assert!(!board.is_in_check(Color::White));
    assert_eq!(board.king_square(Color::White), None);
    assert_eq!(board.legal_moves().len(), 2);
}

#[test]
fn test_move_list_annotations_on_mate() {
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let mate = board.parse_uci("a1a8").unwrap();
    assert!(mate.gives_check());
    let next = board.apply_move(&mate);
    assert_eq!(next.result(), GameResult::WhiteWinsByCheckmate);
    assert!(next.is_terminal());
    assert_eq!(next.legal_moves().len(), 0);
}

#[test]
fn test_extra_king_uses_first_in_scan_order() {
    // The rook on h8 attacks the h1 king, but only the a1 king counts.
    let board = Board::from_fen("4k2r/8/8/8/8/8/P7/K6K w - - 0 1");
    assert_eq!(board.king_square(Color::White), Some(Square(0, 0)));
    assert_eq!(board.result(), GameResult::InProgress);
    assert!(!board.is_in_check(Color::White));
    assert!(board.checking_squares(Color::White).is_empty());
    assert!(board.has_legal_move());
}
