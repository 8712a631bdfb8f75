pub mod board;

pub use board::{is_checkmate, is_in_check, is_legal_move, Board, Color, Piece, PieceKind, Square};
