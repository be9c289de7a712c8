//! Self-play runner for two automated players

use chess_core::{Board, BoardState, Color, Move, SelectError};
use tracing::{debug, info};

use crate::driver::{TurnDriver, TurnError};

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The side to move was checkmated.
    Checkmate { winner: Color },
    /// The side to move had already lost its king.
    KingCaptured { winner: Color },
    /// The side to move had no candidate move at all.
    NoMoves { side: Color },
    /// The ply cap was reached.
    MoveLimit,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } | GameOutcome::KingCaptured { winner } => {
                Some(winner)
            }
            GameOutcome::NoMoves { .. } | GameOutcome::MoveLimit => None,
        }
    }
}

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub moves: Vec<Move>,
    pub final_board: Board,
}

/// Alternates two drivers on one board until the game ends.
#[derive(Debug, Clone)]
pub struct GameRunner {
    max_plies: u32,
}

impl GameRunner {
    pub fn new(max_plies: u32) -> Self {
        Self { max_plies }
    }

    /// Play from the standard starting position.
    pub fn play(
        &self,
        white: &mut TurnDriver,
        black: &mut TurnDriver,
    ) -> Result<GameRecord, TurnError> {
        self.play_from(Board::new(), white, black, |_, _| {})
    }

    /// Play from `board`, calling `observe` with the position after each ply.
    ///
    /// The game ends on checkmate (a missing king included), when the side
    /// to move has no candidates, or at the ply cap. Any other turn error is
    /// returned as is.
    pub fn play_from<F>(
        &self,
        mut board: Board,
        white: &mut TurnDriver,
        black: &mut TurnDriver,
        mut observe: F,
    ) -> Result<GameRecord, TurnError>
    where
        F: FnMut(&Board, Move),
    {
        let mut moves = Vec::new();

        let outcome = loop {
            let side = board.turn();
            match board.state() {
                BoardState::Checkmate => break GameOutcome::Checkmate { winner: side.other() },
                BoardState::MissingKing => {
                    break GameOutcome::KingCaptured {
                        winner: side.other(),
                    }
                }
                BoardState::Check => debug!(%side, "in check"),
                BoardState::Ongoing => {}
            }
            if moves.len() as u32 >= self.max_plies {
                break GameOutcome::MoveLimit;
            }

            let driver = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            match driver.play_turn(&mut board) {
                Ok(mv) => {
                    moves.push(mv);
                    observe(&board, mv);
                }
                Err(TurnError::Select(SelectError::NoCandidateMoves)) => {
                    break GameOutcome::NoMoves { side };
                }
                Err(e) => return Err(e),
            }
        };

        info!(?outcome, plies = moves.len(), "game finished");
        Ok(GameRecord {
            outcome,
            moves,
            final_board: board,
        })
    }
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
