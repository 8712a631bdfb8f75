//! Chess board representation and move legality rules.
//!
//! The board is a plain 8x8 grid of optional pieces. The rules layer
//! answers three questions about a position: is a move legal, is a color
//! in check, and is a color checkmated. Hypothetical moves are always
//! evaluated on an independent board copy, never on the caller's board.
//!
//! # Example
//! ```
//! use chess_rules::board::{is_legal_move, Board, Square};
//!
//! let board = Board::new();
//! assert!(is_legal_move(&board, Square(2, 5), Square(4, 5))); // e2-e4
//! assert!(!is_legal_move(&board, Square(1, 1), Square(3, 1))); // blocked rook
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, KingNotFound, MoveParseError, SquareError};
pub use state::Board;
pub use types::{Color, Piece, PieceKind, Square};

// Public API - rules entry points
pub use check::{is_checkmate, is_in_check, leaves_in_check};
pub use rules::is_legal_move;
