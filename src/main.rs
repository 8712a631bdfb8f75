//! Interactive two-player chess driver.
//!
//! Reads "e2-e4" style move pairs from stdin, validates them against the
//! rules engine, and alternates turns until a checkmate is reached. All
//! rule knowledge lives in the library; this loop only parses input,
//! enforces turn order, and commits validated moves.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chess_rules::board::{
    is_checkmate, is_in_check, is_legal_move, leaves_in_check, Board, Color, MoveParseError,
    Square,
};

fn main() {
    let mut board = Board::new();
    let mut turn = Color::White;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{board}");

        match is_checkmate(&board, turn) {
            Ok(true) => {
                println!("Checkmate! {} wins.", turn.opponent());
                return;
            }
            Ok(false) => {}
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        }
        if matches!(is_in_check(&board, turn), Ok(true)) {
            println!("{turn} is in check.");
        }

        // Iterative retry until a committed move; invalid input never
        // recurses, it just re-prompts.
        let (start, end) = loop {
            print!("{turn} to move (e.g. e2-e4): ");
            if io::stdout().flush().is_err() {
                return;
            }
            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    eprintln!("{err}");
                    return;
                }
                None => return,
            };

            let (start, end) = match parse_move_pair(line.trim()) {
                Ok(pair) => pair,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            match board.get(start) {
                Some(piece) if piece.color == turn => {}
                Some(_) => {
                    println!("The piece on {start} belongs to {}.", turn.opponent());
                    continue;
                }
                None => {
                    println!("No piece on {start}.");
                    continue;
                }
            }

            if !is_legal_move(&board, start, end) {
                println!("{start}-{end} is not a legal move.");
                continue;
            }
            match leaves_in_check(&board, start, end, turn) {
                Ok(true) => {
                    println!("{start}-{end} would leave your king in check.");
                    continue;
                }
                Ok(false) => break (start, end),
                Err(err) => {
                    eprintln!("{err}");
                    return;
                }
            }
        };

        board.apply_move(start, end);
        turn = turn.opponent();
    }
}

/// Parse a "e2-e4" start-end pair.
fn parse_move_pair(input: &str) -> Result<(Square, Square), MoveParseError> {
    let (start, end) = input.split_once('-').ok_or_else(|| {
        MoveParseError::InvalidFormat {
            found: input.to_string(),
        }
    })?;
    let start = Square::from_str(start.trim()).map_err(|_| MoveParseError::InvalidSquare {
        notation: input.to_string(),
    })?;
    let end = Square::from_str(end.trim()).map_err(|_| MoveParseError::InvalidSquare {
        notation: input.to_string(),
    })?;
    Ok((start, end))
}
