use super::*;

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 1);
    assert_eq!(piece_value(PieceKind::Knight), 3);
    assert_eq!(piece_value(PieceKind::Bishop), 3);
    assert_eq!(piece_value(PieceKind::Rook), 5);
    assert_eq!(piece_value(PieceKind::Queen), 9);
    assert_eq!(piece_value(PieceKind::King), 1000);
}

#[test]
fn test_startpos_is_balanced() {
    let board = Board::new();
    assert_eq!(evaluate(&board, Color::White), 0);
    assert_eq!(evaluate(&board, Color::Black), 0);
}

#[test]
fn test_evaluate_mixed_row() {
    // White pawn, black rook, white queen, black king, white bishop
    let board = Board::from_placement("PrQkB3/8/8/8/8/8/8/8 w").unwrap();
    assert_eq!(evaluate(&board, Color::White), 1 - 5 + 9 - 1000 + 3);
    assert_eq!(evaluate(&board, Color::Black), -1 + 5 - 9 + 1000 - 3);
}
