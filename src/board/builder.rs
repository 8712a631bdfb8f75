//! Fluent builder for constructing chess positions.
//!
//! Allows creating sparse positions piece by piece rather than parsing
//! FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(1, 5), Color::White, PieceKind::King)
//!     .piece(Square(8, 5), Color::Black, PieceKind::King)
//!     .piece(Square(2, 1), Color::White, PieceKind::Pawn)
//!     .build();
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Add a piece that has not yet moved.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.push((square, Piece::new(kind, color)));
        self
    }

    /// Add a piece with its `has_moved` flag already set. Only the pawn
    /// double-step rule distinguishes the two.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        let mut piece = Piece::new(kind, color);
        piece.has_moved = true;
        self.pieces.push((square, piece));
        self
    }

    /// Build the board. Later pieces overwrite earlier ones on the same
    /// square.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set(square, Some(piece));
        }
        board
    }
}
