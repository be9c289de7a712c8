//! Material Lookahead Engine
//!
//! One-ply search: every candidate is played on the board, the resulting
//! material balance is scored, and the move is taken back.

mod search;

use chess_core::{Board, Color, Move, SelectError, Strategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A strategy that keeps the candidate leaving the best material balance.
///
/// Ties keep the first candidate seen. The random fallback only fires when
/// no candidate could be simulated at all.
#[derive(Debug, Clone)]
pub struct LookaheadEngine {
    rng: StdRng,
    /// Candidates simulated during the last selection
    nodes: u64,
}

impl LookaheadEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for LookaheadEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for LookaheadEngine {
    fn select_move(
        &mut self,
        board: &mut Board,
        color: Color,
        candidates: &[Move],
    ) -> Result<Move, SelectError> {
        self.nodes = 0;
        let (best, _score) =
            search::pick_best_move(board, color, candidates, &mut self.nodes, &mut self.rng)?;
        Ok(best)
    }

    fn name(&self) -> &str {
        "Lookahead v1.0"
    }
}

// Re-export for direct use if needed
pub use search::pick_best_move;
