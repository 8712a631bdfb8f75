//! Error types for chess board operations.

use std::fmt;

use super::types::Color;

/// Error returned when a board has no king of the requested color.
///
/// Check and checkmate queries need the king's square; a board without
/// one is malformed (or deliberately test-constructed), and the error
/// propagates rather than being treated as "not in check".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingNotFound {
    pub color: Color,
}

impl fmt::Display for KingNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No {} king on the board", self.color)
    }
}

impl std::error::Error for KingNotFound {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of range (must be 1-8)
    RowOutOfRange { row: i8 },
    /// Column out of range (must be 1-8)
    ColOutOfRange { col: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfRange { row } => {
                write!(f, "Row {row} out of range (must be 1-8)")
            }
            SquareError::ColOutOfRange { col } => {
                write!(f, "Column {col} out of range (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move-pair parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Input does not match the "e2-e4" start-end format
    InvalidFormat { found: String },
    /// Invalid square notation within the pair
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { found } => {
                write!(f, "Expected a start-end pair like 'e2-e4', found '{found}'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for FEN piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty input string
    Empty,
    /// Placement must have exactly 8 ranks
    BadRankCount { found: usize },
    /// Invalid piece character in placement string
    InvalidPiece { char: char },
    /// A rank describes the wrong number of files
    WrongFileCount { rank: i8, files: i8 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::BadRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}
