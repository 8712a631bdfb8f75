use std::fmt;

use super::error::KingNotFound;
use super::types::{Color, Piece, PieceKind, Square};

/// An 8x8 chess board: a total mapping from square to optional piece.
///
/// Pieces are plain `Copy` values, so `Clone` produces a fully
/// independent deep copy; mutating a clone can never affect the board it
/// was cloned from. All hypothetical move evaluation relies on this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // squares[row - 1][col - 1]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a board with the standard starting arrangement: pawns on
    /// rows 2/7, back ranks on rows 1/8.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (i, &kind) in back_rank.iter().enumerate() {
            let col = i as i8 + 1;
            board.set(Square(1, col), Some(Piece::new(kind, Color::White)));
            board.set(Square(8, col), Some(Piece::new(kind, Color::Black)));
            board.set(Square(2, col), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(Square(7, col), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        }
        board
    }

    /// Create an empty board
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece on `square`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[(square.row() - 1) as usize][(square.col() - 1) as usize]
    }

    /// Place `piece` on `square` (or clear it with `None`)
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[(square.row() - 1) as usize][(square.col() - 1) as usize] = piece;
    }

    /// All squares occupied by pieces of `color`, in board order
    #[must_use]
    pub fn pieces_of(&self, color: Color) -> Vec<(Square, Piece)> {
        Square::all()
            .filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    /// The square of `color`'s king.
    ///
    /// # Errors
    /// Returns [`KingNotFound`] when the board holds no king of that
    /// color. A well-formed board has exactly one king per color.
    pub fn king_square(&self, color: Color) -> Result<Square, KingNotFound> {
        Square::all()
            .find(|&sq| {
                self.get(sq)
                    .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == color)
            })
            .ok_or(KingNotFound { color })
    }

    /// Commit an already-validated move: discard any piece on `end`,
    /// relocate the piece from `start` with `has_moved` set, clear
    /// `start`.
    ///
    /// This is the only operation that flips `has_moved`; hypothetical
    /// evaluation in the rules layer never calls it. A move with no
    /// piece on `start` is a caller bug and leaves the board unchanged.
    pub fn apply_move(&mut self, start: Square, end: Square) {
        if let Some(mut piece) = self.get(start) {
            piece.has_moved = true;
            self.set(end, Some(piece));
            self.set(start, None);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (1..=8).rev() {
            write!(f, "{row} |")?;
            for col in 1..=8 {
                let ch = match self.get(Square(row, col)) {
                    Some(piece) => piece.to_fen_char(),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
