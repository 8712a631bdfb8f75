//! Core chess types.
//!
//! The fundamental types used throughout the rules engine:
//! - `PieceKind` and `Color` - piece types and colors
//! - `Piece` - a colored piece with its move-history flag
//! - `Square` - a 1-based (row, column) board coordinate

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
