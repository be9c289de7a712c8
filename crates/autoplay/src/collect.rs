//! Candidate move collection

use chess_core::{legal_moves, Board, Color, Move, Square};
use rayon::prelude::*;

/// Every `(from, to)` pair available to `color`'s pieces.
///
/// With `parallel` set, each piece's destinations are generated on the rayon
/// pool; the board is only read, so the join at the end is the only
/// synchronisation. Callers must not rely on the order of the result.
pub fn collect_candidates(board: &Board, color: Color, parallel: bool) -> Vec<Move> {
    let origins: Vec<Square> = board.pieces(color).map(|(sq, _)| sq).collect();
    if parallel {
        origins
            .par_iter()
            .flat_map_iter(|&from| moves_from(board, from))
            .collect()
    } else {
        origins
            .iter()
            .flat_map(|&from| moves_from(board, from))
            .collect()
    }
}

fn moves_from(board: &Board, from: Square) -> impl Iterator<Item = Move> {
    legal_moves(board, from)
        .into_iter()
        .map(move |to| Move::new(from, to))
}

#[cfg(test)]
#[path = "collect_tests.rs"]
mod collect_tests;
