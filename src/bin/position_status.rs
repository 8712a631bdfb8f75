use std::env;
use std::process::ExitCode;

use chess_rules::board::{is_checkmate, is_in_check, is_legal_move, leaves_in_check, Board, Color, Square};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: position_status <fen-placement> [white|black]");
        return ExitCode::FAILURE;
    }

    let color = match args.get(2).map(String::as_str) {
        None | Some("white") | Some("w") => Color::White,
        Some("black") | Some("b") => Color::Black,
        Some(other) => {
            eprintln!("unknown color '{other}', expected white or black");
            return ExitCode::FAILURE;
        }
    };

    let board = match Board::from_fen(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let in_check = match is_in_check(&board, color) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let checkmate = match is_checkmate(&board, color) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut safe_moves = 0usize;
    for (start, _) in board.pieces_of(color) {
        for end in Square::all() {
            if is_legal_move(&board, start, end)
                && matches!(leaves_in_check(&board, start, end, color), Ok(false))
            {
                safe_moves += 1;
            }
        }
    }

    println!("{board}");
    println!("side: {color}");
    println!("in_check: {in_check}");
    println!("checkmate: {checkmate}");
    println!("safe_moves: {safe_moves}");
    ExitCode::SUCCESS
}
