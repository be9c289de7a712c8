//! Greedy Capture Engine
//!
//! Takes the most valuable enemy piece on offer and otherwise plays a random
//! candidate. No lookahead: the resulting position is never examined, so
//! the engine happily trades its queen for a pawn.

use chess_core::{piece_value, Board, Color, Move, SelectError, Strategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;


/// A strategy that captures greedily.
///
/// Among capturing candidates the one taking the highest-valued piece wins;
/// on equal value the first one enumerated is kept. With no capture
/// available a candidate is picked uniformly at random.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic random fallback, for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for GreedyEngine {
    fn select_move(
        &mut self,
        board: &mut Board,
        color: Color,
        candidates: &[Move],
    ) -> Result<Move, SelectError> {
        let mut best_move = None;
        let mut highest_capture = 0;

        for &mv in candidates {
            let target = match board.piece_at(mv.to) {
                Some(pc) if pc.color != color => pc,
                _ => continue,
            };
            let value = piece_value(target.kind);
            trace!(%mv, value, "capture candidate");
            if value > highest_capture {
                highest_capture = value;
                best_move = Some(mv);
            }
        }

        match best_move {
            Some(mv) => Ok(mv),
            None => candidates
                .choose(&mut self.rng)
                .copied()
                .ok_or(SelectError::NoCandidateMoves),
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
