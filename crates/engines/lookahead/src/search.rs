use chess_core::{evaluate, Board, Color, Move, SelectError};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Score every candidate one ply deep and return the best with its score.
///
/// Each candidate is applied to `board`, evaluated from `color`'s side and
/// taken back, so `board` is unchanged on return. Only a strictly higher
/// score replaces the current best. If nothing could be simulated the move
/// is drawn at random from `candidates` and reported with `i32::MIN`.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &mut Board,
    color: Color,
    candidates: &[Move],
    nodes: &mut u64,
    rng: &mut R,
) -> Result<(Move, i32), SelectError> {
    if candidates.is_empty() {
        return Err(SelectError::NoCandidateMoves);
    }

    let mut best: Option<(Move, i32)> = None;
    for &mv in candidates {
        let undo = match board.make_move(mv) {
            Ok(u) => u,
            Err(_) => continue,
        };
        *nodes += 1;
        let score = evaluate(board, color);
        board.unmake_move(undo);
        trace!(%mv, score, "scored candidate");

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }

    match best {
        Some(found) => Ok(found),
        None => candidates
            .choose(rng)
            .map(|&mv| (mv, i32::MIN))
            .ok_or(SelectError::NoCandidateMoves),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
