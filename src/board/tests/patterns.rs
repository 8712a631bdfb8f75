//! Per-piece move pattern rules on otherwise empty boards.

use crate::board::{is_legal_move, Board, BoardBuilder, Color, PieceKind, Square};

/// A board holding a single piece that has not yet moved.
fn lone(square: Square, color: Color, kind: PieceKind) -> Board {
    BoardBuilder::new().piece(square, color, kind).build()
}

#[test]
fn test_rook_moves_straight() {
    let board = lone(Square(1, 1), Color::White, PieceKind::Rook);
    assert!(is_legal_move(&board, Square(1, 1), Square(1, 8)));
    assert!(is_legal_move(&board, Square(1, 1), Square(8, 1)));
    assert!(!is_legal_move(&board, Square(1, 1), Square(2, 2)));
    assert!(!is_legal_move(&board, Square(1, 1), Square(2, 3)));
}

#[test]
fn test_bishop_moves_diagonally() {
    let board = lone(Square(4, 4), Color::White, PieceKind::Bishop);
    assert!(is_legal_move(&board, Square(4, 4), Square(8, 8)));
    assert!(is_legal_move(&board, Square(4, 4), Square(1, 7)));
    assert!(!is_legal_move(&board, Square(4, 4), Square(4, 8)));
}

#[test]
fn test_bishop_rejects_non_diagonal() {
    // (1,1) -> (2,3) is neither straight nor diagonal
    let board = lone(Square(1, 1), Color::White, PieceKind::Bishop);
    assert!(!is_legal_move(&board, Square(1, 1), Square(2, 3)));
}

#[test]
fn test_queen_moves_both_ways() {
    let board = lone(Square(4, 4), Color::Black, PieceKind::Queen);
    assert!(is_legal_move(&board, Square(4, 4), Square(4, 1)));
    assert!(is_legal_move(&board, Square(4, 4), Square(1, 1)));
    assert!(is_legal_move(&board, Square(4, 4), Square(8, 4)));
    assert!(!is_legal_move(&board, Square(4, 4), Square(6, 5)));
}

#[test]
fn test_knight_moves_in_l_shapes() {
    let board = lone(Square(1, 1), Color::White, PieceKind::Knight);
    assert!(is_legal_move(&board, Square(1, 1), Square(2, 3)));
    assert!(is_legal_move(&board, Square(1, 1), Square(3, 2)));
    assert!(!is_legal_move(&board, Square(1, 1), Square(3, 3)));
    assert!(!is_legal_move(&board, Square(1, 1), Square(1, 3)));
}

#[test]
fn test_king_moves_one_step() {
    let board = lone(Square(1, 1), Color::White, PieceKind::King);
    assert!(is_legal_move(&board, Square(1, 1), Square(2, 2)));
    assert!(is_legal_move(&board, Square(1, 1), Square(1, 2)));
    assert!(!is_legal_move(&board, Square(1, 1), Square(2, 3)));
    assert!(!is_legal_move(&board, Square(1, 1), Square(3, 1)));
}

#[test]
fn test_pawn_single_advance() {
    let board = lone(Square(2, 5), Color::White, PieceKind::Pawn);
    assert!(is_legal_move(&board, Square(2, 5), Square(3, 5)));
    // Backwards and sideways are never pawn moves
    assert!(!is_legal_move(&board, Square(2, 5), Square(1, 5)));
    assert!(!is_legal_move(&board, Square(2, 5), Square(2, 6)));
}

#[test]
fn test_pawn_double_step_requires_unmoved() {
    let board = lone(Square(2, 5), Color::White, PieceKind::Pawn);
    assert!(is_legal_move(&board, Square(2, 5), Square(4, 5)));

    let moved = BoardBuilder::new()
        .moved_piece(Square(2, 5), Color::White, PieceKind::Pawn)
        .build();
    assert!(!is_legal_move(&moved, Square(2, 5), Square(4, 5)));
    assert!(is_legal_move(&moved, Square(2, 5), Square(3, 5)));
}

#[test]
fn test_black_pawn_moves_down() {
    let board = lone(Square(7, 5), Color::Black, PieceKind::Pawn);
    assert!(is_legal_move(&board, Square(7, 5), Square(6, 5)));
    assert!(is_legal_move(&board, Square(7, 5), Square(5, 5)));
    assert!(!is_legal_move(&board, Square(7, 5), Square(8, 5)));
}

#[test]
fn test_pawn_captures_diagonally_only_when_occupied() {
    let board = BoardBuilder::new()
        .piece(Square(4, 5), Color::White, PieceKind::Pawn)
        .piece(Square(5, 6), Color::Black, PieceKind::Knight)
        .build();
    assert!(is_legal_move(&board, Square(4, 5), Square(5, 6)));
    // Diagonal onto an empty square is not a pawn move
    assert!(!is_legal_move(&board, Square(4, 5), Square(5, 4)));
}

#[test]
fn test_pawn_cannot_advance_onto_occupied_square() {
    let board = BoardBuilder::new()
        .piece(Square(4, 5), Color::White, PieceKind::Pawn)
        .piece(Square(5, 5), Color::Black, PieceKind::Knight)
        .build();
    assert!(!is_legal_move(&board, Square(4, 5), Square(5, 5)));
}

#[test]
fn test_friendly_capture_is_illegal() {
    let board = BoardBuilder::new()
        .piece(Square(1, 1), Color::White, PieceKind::Rook)
        .piece(Square(1, 8), Color::White, PieceKind::Knight)
        .build();
    assert!(!is_legal_move(&board, Square(1, 1), Square(1, 8)));
}

#[test]
fn test_enemy_capture_is_legal() {
    let board = BoardBuilder::new()
        .piece(Square(1, 1), Color::White, PieceKind::Rook)
        .piece(Square(1, 8), Color::Black, PieceKind::Knight)
        .build();
    assert!(is_legal_move(&board, Square(1, 1), Square(1, 8)));
}

#[test]
fn test_zero_move_is_illegal() {
    let board = lone(Square(4, 4), Color::White, PieceKind::Queen);
    assert!(!is_legal_move(&board, Square(4, 4), Square(4, 4)));
}

#[test]
fn test_empty_start_square_is_illegal() {
    let board = Board::empty();
    assert!(!is_legal_move(&board, Square(4, 4), Square(4, 5)));
}
