//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Every square on the board, row-major from (1,1) to (8,8).
static ALL_SQUARES: Lazy<[Square; 64]> = Lazy::new(|| {
    let mut squares = [Square(1, 1); 64];
    for row in 1..=8 {
        for col in 1..=8 {
            squares[((row - 1) * 8 + (col - 1)) as usize] = Square(row, col);
        }
    }
    squares
});

/// A square on the chess board, represented as (row, column).
///
/// Both components are 1-based: row 1 is White's back rank, column 1 is
/// the a-file. Ordering is row-major board order (a1, b1, ..., h8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub i8, pub i8); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: i8, col: i8) -> Option<Self> {
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (1-8, where 1 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.0
    }

    /// Get the column (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.1
    }

    /// The square displaced by (d_row, d_col), or `None` off the board
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Square::new(self.0 + d_row, self.1 + d_col)
    }

    /// Iterate over all 64 squares in board order
    pub fn all() -> impl Iterator<Item = Square> {
        ALL_SQUARES.iter().copied()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 - 1 + b'a') as char, self.0)
    }
}

impl TryFrom<(i8, i8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(SquareError::RowOutOfRange { row });
        }
        if !(1..=8).contains(&col) {
            return Err(SquareError::ColOutOfRange { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a' + 1) as i8,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match bytes[1] {
            b'1'..=b'8' => (bytes[1] - b'0') as i8,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square(row, col))
    }
}
