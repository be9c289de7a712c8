//! Error types for board mutation, move selection and parsing.

use thiserror::Error;

use crate::types::Square;

/// A move the board refused. Nothing is mutated when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece on {from}")]
    EmptySquare { from: Square },

    #[error("illegal move: {from} -> {to}")]
    Illegal { from: Square, to: Square },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The strategy was handed an empty candidate list.
    #[error("no candidate moves available")]
    NoCandidateMoves,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid square notation: {0}")]
    Square(String),

    #[error("invalid move notation: {0}")]
    Move(String),

    #[error("invalid placement: {0}")]
    Placement(String),
}
