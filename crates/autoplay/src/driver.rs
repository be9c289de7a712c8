//! Turn driver for automated players

use chess_core::{Board, Move, MoveError, SelectError, Square, Strategy};
use thiserror::Error;
use tracing::debug;

use crate::collect::collect_candidates;

/// Why a turn could not be played. The board is untouched in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error(transparent)]
    Select(#[from] SelectError),

    /// The strategy chose something the board refused.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Plays single turns for one automated player.
///
/// The driver is the only place that advances the board's turn after an
/// automated move; the board mutators never do.
pub struct TurnDriver {
    strategy: Box<dyn Strategy>,
    parallel: bool,
}

impl TurnDriver {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy,
            parallel: true,
        }
    }

    /// Collect candidates on the rayon pool (default) or inline.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Collect, select and apply one move for the side to move, then pass
    /// the turn. Does not loop.
    pub fn play_turn(&mut self, board: &mut Board) -> Result<Move, TurnError> {
        let color = board.turn();
        let candidates = collect_candidates(board, color, self.parallel);
        debug!(
            strategy = self.strategy.name(),
            %color,
            candidates = candidates.len(),
            "collected candidates"
        );

        let mv = self.strategy.select_move(board, color, &candidates)?;
        board.move_piece(mv.from, mv.to)?;
        board.pass_turn();
        debug!(%mv, "applied move");
        Ok(mv)
    }
}

/// Apply an externally supplied move (e.g. a human's) and pass the turn.
///
/// Only pieces of the side to move may be moved. On error the board,
/// including its turn, is unchanged.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> Result<Move, MoveError> {
    match board.piece_at(from) {
        None => return Err(MoveError::EmptySquare { from }),
        Some(pc) if pc.color != board.turn() => return Err(MoveError::Illegal { from, to }),
        Some(_) => {}
    }
    board.move_piece(from, to)?;
    board.pass_turn();
    Ok(Move::new(from, to))
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
