pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod square_set;
pub mod types;

// Re-export core game logic (not strategy-specific)
pub use board::*;
pub use error::*;
pub use eval::{evaluate, piece_value};
pub use movegen::{attacks, legal_moves};
pub use square_set::*;
pub use types::*;

// =============================================================================
// Strategy trait: implemented by every automated move selector
// =============================================================================

/// Chooses one move out of a list of candidates for an automated player.
///
/// Implementations may simulate candidates on `board` but must hand it back
/// exactly as they received it.
pub trait Strategy: Send {
    /// Pick a move for `color` from `candidates`.
    ///
    /// # Errors
    /// [`SelectError::NoCandidateMoves`] when `candidates` is empty.
    fn select_move(
        &mut self,
        board: &mut Board,
        color: Color,
        candidates: &[Move],
    ) -> Result<Move, SelectError>;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}
