//! Move legality evaluation.
//!
//! [`is_legal_move`] is a pure predicate over a board and a start/end
//! square pair: does the move match the piece's pattern and is its path
//! unobstructed, ignoring check safety and turn order. Check safety is
//! layered on separately by [`leaves_in_check`](super::leaves_in_check).

use super::state::Board;
use super::types::{Piece, PieceKind, Square};

/// Is the move from `start` to `end` geometrically legal on `board`?
///
/// Three conditions must all hold: the destination does not carry a
/// friendly piece, the (Δrow, Δcol) shape matches the moving piece's
/// pattern, and no piece sits strictly between start and end on a
/// sliding move. The zero move and a move with no piece on `start` are
/// illegal. The board is never mutated and the mover's own king safety
/// is deliberately not consulted.
#[must_use]
pub fn is_legal_move(board: &Board, start: Square, end: Square) -> bool {
    if start == end {
        return false;
    }
    let Some(piece) = board.get(start) else {
        return false;
    };
    if board
        .get(end)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }
    matches_pattern(board, piece, start, end) && !is_obstructed(board, piece, start, end)
}

/// Does the move shape match `piece`'s movement pattern?
fn matches_pattern(board: &Board, piece: Piece, start: Square, end: Square) -> bool {
    let d_row = end.row() - start.row();
    let d_col = end.col() - start.col();

    match piece.kind {
        PieceKind::Rook => d_row == 0 || d_col == 0,
        PieceKind::Bishop => d_row.abs() == d_col.abs(),
        PieceKind::Queen => d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs(),
        PieceKind::Knight => {
            (d_row.abs() == 1 && d_col.abs() == 2) || (d_row.abs() == 2 && d_col.abs() == 1)
        }
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Pawn => pawn_pattern(board, piece, d_row, d_col, end),
    }
}

/// Pawn shapes: a one-column diagonal capture onto an occupied enemy
/// square, or a straight advance onto an empty square (two rows only
/// while the pawn has never moved). Everything else is illegal, in
/// particular a diagonal step onto an empty square.
fn pawn_pattern(board: &Board, piece: Piece, d_row: i8, d_col: i8, end: Square) -> bool {
    let forward = piece.color.pawn_direction();

    match board.get(end) {
        // Occupied: only the capture shape applies. The friendly-capture
        // rule has already rejected same-color targets.
        Some(_) => d_row == forward && d_col.abs() == 1,
        None => {
            if d_col != 0 {
                return false;
            }
            d_row == forward || (d_row == 2 * forward && !piece.has_moved)
        }
    }
}

/// Is any square strictly between `start` and `end` occupied?
///
/// Only sliding moves and the pawn double step have intermediate
/// squares; knight, king, and single-step pawn moves never do.
fn is_obstructed(board: &Board, piece: Piece, start: Square, end: Square) -> bool {
    let has_path = piece.kind.is_slider()
        || (piece.kind == PieceKind::Pawn && (end.row() - start.row()).abs() == 2);
    if !has_path {
        return false;
    }
    path_between(start, end).any(|sq| board.get(sq).is_some())
}

/// The open interval of squares strictly between `start` and `end`,
/// walked one unit step at a time. Callers guarantee the two squares
/// share a rank, file, or diagonal.
fn path_between(start: Square, end: Square) -> impl Iterator<Item = Square> {
    let row_step = (end.row() - start.row()).signum();
    let col_step = (end.col() - start.col()).signum();
    std::iter::successors(start.offset(row_step, col_step), move |sq| {
        sq.offset(row_step, col_step)
    })
    .take_while(move |&sq| sq != end)
}
