use std::env;
use std::process::ExitCode;

use chess_rules::board::{Board, STARTING_FEN};

/// Replays UCI moves from a FEN (or the initial position) and prints the
/// resulting status and legal moves.
///
/// usage: board_status [--fen "<fen>"] <move1> <move2> ...
fn main() -> ExitCode {
    let mut args = env::args().skip(1).peekable();

    let fen = if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        match args.next() {
            Some(fen) => fen,
            None => {
                eprintln!("usage: board_status [--fen \"<fen>\"] <move1> <move2> ...");
                return ExitCode::FAILURE;
            }
        }
    } else {
        STARTING_FEN.to_string()
    };

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid fen: {err}");
            return ExitCode::FAILURE;
        }
    };

    for uci in args {
        board = match board.apply_uci(&uci) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("{uci}: {err}");
                return ExitCode::FAILURE;
            }
        };
    }

    let legal_moves = board.legal_moves();
    println!("fen: {}", board.to_fen());
    println!("side_to_move: {}", board.side_to_move());
    println!("result: {}", board.result());
    println!("in_check: {}", board.is_in_check(board.side_to_move()));
    println!("legal_moves: {}", legal_moves.len());
    for mv in legal_moves.iter() {
        println!("{} {}", mv.to_uci(), board.move_to_san(mv));
    }
    ExitCode::SUCCESS
}
