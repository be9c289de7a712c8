use crate::{board::Board, types::*};

/// Material value of a piece kind. The king is priced high enough that
/// losing it outweighs any other trade.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 1000,
    }
}

/// Material balance from `perspective`: own pieces count positive,
/// opposing pieces negative.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    board
        .occupied()
        .map(|(_, pc)| {
            let v = piece_value(pc.kind);
            if pc.color == perspective { v } else { -v }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
