use std::fmt;

use crate::error::{MoveError, ParseError};
use crate::movegen::{attacks, legal_moves};
use crate::types::*;

/// Mailbox board: one optional piece per square plus the side to move.
///
/// The mutators never advance `turn`; whoever orchestrates play calls
/// [`Board::pass_turn`] after a move is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
    turn: Color,
}

/// Rook relocation performed as part of castling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RookShift {
    pub from: Square,
    pub to: Square,
    /// The rook as it stood before castling.
    pub piece: Piece,
}

/// Everything needed to take a move back exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub mv: Move,
    /// The moving piece before it moved, `has_moved` included.
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub rook_shift: Option<RookShift>,
}

/// Check status of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardState {
    /// King not attacked. Stalemate is not told apart from this.
    Ongoing,
    /// King attacked, but at least one move escapes.
    Check,
    /// King attacked and no move escapes.
    Checkmate,
    /// No king of the side to move on the board. Counted as checkmate.
    MissingKing,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, White to move.
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7.
    pub fn new() -> Self {
        let mut b = Board::empty(Color::White);
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            b.squares[col as usize] = Some(Piece::new(Color::Black, kind));
            b.squares[8 + col as usize] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[48 + col as usize] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[56 + col as usize] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    pub fn empty(turn: Color) -> Self {
        Board {
            squares: [None; 64],
            turn,
        }
    }

    /// Parse a FEN-style placement with an optional side-to-move field,
    /// e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"`.
    ///
    /// The first rank listed is row 0. Every piece starts unmoved.
    pub fn from_placement(text: &str) -> Result<Self, ParseError> {
        let bad = || ParseError::Placement(text.to_string());
        let mut parts = text.split_whitespace();
        let placement = parts.next().ok_or_else(bad)?;
        let turn = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(_) => return Err(bad()),
        };
        if parts.next().is_some() {
            return Err(bad());
        }

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(bad());
        }

        let mut board = Board::empty(turn);
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if d == 0 {
                        return Err(bad());
                    }
                    col += d as u8;
                } else {
                    let piece = Piece::from_symbol(ch).ok_or_else(bad)?;
                    let sq = Square::new(row as u8, col).ok_or_else(bad)?;
                    board.place(sq, piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(bad());
                }
            }
            if col != 8 {
                return Err(bad());
            }
        }
        Ok(board)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Put `piece` on `sq`, returning whatever stood there.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, c: Color) {
        self.turn = c;
    }

    pub fn pass_turn(&mut self) {
        self.turn = self.turn.other();
    }

    /// All occupied squares with their pieces, in square index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(i, pc)| {
            let pc = (*pc)?;
            Square::from_index(i as u8).map(|sq| (sq, pc))
        })
    }

    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.color == c)
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// True iff some piece of `c`'s opponent can reach `target`.
    ///
    /// Castling destinations do not count as attacks.
    pub fn is_square_attacked(&self, target: Square, c: Color) -> bool {
        self.pieces(c.other())
            .any(|(sq, _)| attacks(self, sq).contains(target))
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(ksq) => self.is_square_attacked(ksq, c),
            None => false,
        }
    }

    /// Apply `from -> to` if it is among the piece's legal destinations.
    ///
    /// On failure the board is left untouched. The turn is not advanced.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Undo, MoveError> {
        if self.piece_at(from).is_none() {
            return Err(MoveError::EmptySquare { from });
        }
        if !legal_moves(self, from).contains(to) {
            return Err(MoveError::Illegal { from, to });
        }
        self.make_move(Move::new(from, to))
    }

    /// Apply a move without checking legality. Used for simulation.
    ///
    /// A king moving two columns along its row castles and brings the
    /// corner rook over to the square it crossed.
    pub fn make_move(&mut self, mv: Move) -> Result<Undo, MoveError> {
        let moved = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { from: mv.from })?;

        let mut rook_shift = None;
        let col_delta = mv.to.col() as i8 - mv.from.col() as i8;
        if moved.kind == PieceKind::King && mv.from.row() == mv.to.row() && col_delta.abs() == 2 {
            let step = col_delta.signum();
            let rook_col = if step > 0 { 7 } else { 0 };
            if let (Some(rook_from), Some(rook_to)) =
                (Square::new(mv.from.row(), rook_col), mv.to.offset(0, -step))
                && let Some(rook) = self.piece_at(rook_from)
                && rook.kind == PieceKind::Rook
                && rook.color == moved.color
            {
                self.squares[rook_from.index()] = None;
                self.squares[rook_to.index()] = Some(Piece {
                    has_moved: true,
                    ..rook
                });
                rook_shift = Some(RookShift {
                    from: rook_from,
                    to: rook_to,
                    piece: rook,
                });
            }
        }

        let captured = self.squares[mv.to.index()].take();
        self.squares[mv.from.index()] = None;
        self.squares[mv.to.index()] = Some(Piece {
            has_moved: true,
            ..moved
        });

        Ok(Undo {
            mv,
            moved,
            captured,
            rook_shift,
        })
    }

    pub fn unmake_move(&mut self, undo: Undo) {
        if let Some(shift) = undo.rook_shift {
            self.squares[shift.to.index()] = None;
            self.squares[shift.from.index()] = Some(shift.piece);
        }
        self.squares[undo.mv.to.index()] = undo.captured;
        self.squares[undo.mv.from.index()] = Some(undo.moved);
    }

    /// Check status for the side to move.
    ///
    /// When in check, every pseudo-legal move of every own piece is tried on
    /// a scratch copy and taken back; the first one that leaves the king
    /// unattacked proves the position is not mate.
    pub fn state(&self) -> BoardState {
        let mover = self.turn;
        let king = match self.king_square(mover) {
            Some(k) => k,
            None => return BoardState::MissingKing,
        };
        if !self.is_square_attacked(king, mover) {
            return BoardState::Ongoing;
        }

        let mut scratch = self.clone();
        let own: Vec<Square> = self.pieces(mover).map(|(sq, _)| sq).collect();
        for from in own {
            for to in legal_moves(&scratch, from) {
                let undo = match scratch.make_move(Move::new(from, to)) {
                    Ok(u) => u,
                    Err(_) => continue,
                };
                let king_now = if from == king { to } else { king };
                let escaped = !scratch.is_square_attacked(king_now, mover);
                scratch.unmake_move(undo);
                if escaped {
                    return BoardState::Check;
                }
            }
        }
        BoardState::Checkmate
    }

    /// Checkmate for the side to move. A missing king counts as mate.
    pub fn is_checkmate(&self) -> bool {
        matches!(
            self.state(),
            BoardState::Checkmate | BoardState::MissingKing
        )
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let ch = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map(Piece::symbol)
                    .unwrap_or('.');
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
