//! FEN piece-placement parsing and serialization.
//!
//! Only the placement field is interpreted; any trailing FEN fields
//! (side to move, castling, ...) are accepted and ignored, so full FEN
//! strings from other tools can be pasted in unchanged.

use super::error::FenError;
use super::state::Board;
use super::types::{Color, Piece, PieceKind, Square};

impl Board {
    /// Parse a board from the placement field of a FEN string.
    ///
    /// `has_moved` is reconstructed from the placement: pawns off their
    /// color's starting row are marked moved, everything else is not.
    /// Only the pawn double-step rule reads the flag, so this recovers
    /// exactly the information the rules engine consumes.
    ///
    /// # Errors
    /// Returns a [`FenError`] for an empty string, a wrong rank count,
    /// an invalid piece character, or a rank describing the wrong
    /// number of files.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (i, rank) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let row = 8 - i as i8;
            let mut col: i8 = 1;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as i8;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col > 8 {
                    return Err(FenError::WrongFileCount {
                        rank: row,
                        files: col,
                    });
                }
                let mut piece = Piece::new(kind, color);
                if kind == PieceKind::Pawn && row != color.pawn_start_row() {
                    piece.has_moved = true;
                }
                board.set(Square(row, col), Some(piece));
                col += 1;
            }
            if col != 9 {
                return Err(FenError::WrongFileCount {
                    rank: row,
                    files: col - 1,
                });
            }
        }

        Ok(board)
    }

    /// Serialize the board to a FEN placement string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in (1..=8).rev() {
            let mut empty_run = 0;
            for col in 1..=8 {
                match self.get(Square(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push(char::from_digit(empty_run, 10).unwrap_or('0'));
            }
            if row > 1 {
                fen.push('/');
            }
        }
        fen
    }
}
