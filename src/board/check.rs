//! Check detection, check-safety filtering, and checkmate search.

use log::debug;

use super::error::KingNotFound;
use super::rules::is_legal_move;
use super::state::Board;
use super::types::{Color, Square};

/// Is `color`'s king currently attacked by any opposing piece?
///
/// Tests whether any opposing piece has a legal move onto the king's
/// square. This deliberately does not ask whether that opposing move
/// would be check-safe for its own side; doing so would recurse without
/// bound, and "could this piece currently reach the king" is the right
/// question for check.
///
/// # Errors
/// Propagates [`KingNotFound`] when `color` has no king on `board`.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, KingNotFound> {
    let king = board.king_square(color)?;
    Ok(board
        .pieces_of(color.opponent())
        .into_iter()
        .any(|(square, _)| is_legal_move(board, square, king)))
}

/// Would moving `start` to `end` leave `color`'s own king in check?
///
/// The candidate move is simulated on an independent copy of `board`:
/// any piece on `end` is discarded, the piece on `start` is relocated
/// with its `has_moved` flag untouched, and `start` is cleared. The
/// caller's board is never modified; flipping `has_moved` happens only
/// when a move is actually committed.
///
/// # Errors
/// Propagates [`KingNotFound`] when `color` has no king on `board`.
pub fn leaves_in_check(
    board: &Board,
    start: Square,
    end: Square,
    color: Color,
) -> Result<bool, KingNotFound> {
    let mut scratch = board.clone();
    scratch.set(end, scratch.get(start));
    scratch.set(start, None);
    is_in_check(&scratch, color)
}

/// Is `color` checkmated?
///
/// A color that is not in check is not checkmated, whatever its move
/// options (a stalemated position is reported as ongoing). Otherwise
/// every (own piece, destination) pair is searched for a move that is
/// legal and check-safe; the search stops at the first rescuing move
/// found, and only a fully exhausted search is checkmate.
///
/// # Errors
/// Propagates [`KingNotFound`] when `color` has no king on `board`.
pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, KingNotFound> {
    if !is_in_check(board, color)? {
        return Ok(false);
    }

    for (start, _) in board.pieces_of(color) {
        for end in Square::all() {
            if is_legal_move(board, start, end) && !leaves_in_check(board, start, end, color)? {
                debug!("{color} escapes check with {start}-{end}");
                return Ok(false);
            }
        }
    }

    debug!("{color} has no move out of check");
    Ok(true)
}
