use crate::{board::Board, square_set::SquareSet, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pseudo-legal destinations for the piece on `from`.
///
/// Moves that leave the mover's own king attacked are not filtered out.
/// A vacant `from` yields the empty set.
pub fn legal_moves(board: &Board, from: Square) -> SquareSet {
    generate(board, from, true)
}

/// Destinations used for attack detection: the same as [`legal_moves`]
/// without castling, so king generation never re-enters itself.
pub fn attacks(board: &Board, from: Square) -> SquareSet {
    generate(board, from, false)
}

fn generate(board: &Board, from: Square, with_castling: bool) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let pc = match board.piece_at(from) {
        Some(p) => p,
        None => return out,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, &mut out),
        PieceKind::Knight => gen_steps(board, from, pc.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &DIAGONALS, &mut out);
            gen_slider(board, from, pc.color, &ORTHOGONALS, &mut out);
        }
        PieceKind::King => {
            gen_steps(board, from, pc.color, &KING_DELTAS, &mut out);
            if with_castling {
                gen_castle(board, from, pc, &mut out);
            }
        }
    }
    out
}

/// Row delta a pawn of `c` advances by.
fn pawn_direction(c: Color) -> i8 {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut SquareSet) {
    let dir = pawn_direction(c);
    let start_row: u8 = match c {
        Color::White => 6,
        Color::Black => 1,
    };

    // forward 1
    if let Some(to) = from.offset(dir, 0)
        && board.piece_at(to).is_none()
    {
        out.insert(to);

        // forward 2 from start
        if from.row() == start_row
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.piece_at(to2).is_none()
        {
            out.insert(to2);
        }
    }

    // captures
    for dc in [-1, 1] {
        if let Some(to) = from.offset(dir, dc)
            && let Some(target) = board.piece_at(to)
            && target.color != c
        {
            out.insert(to);
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut SquareSet) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.insert(to),
                Some(pc) if pc.color != c => out.insert(to),
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut SquareSet) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.insert(to),
                Some(pc) if pc.color != c => {
                    out.insert(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(board: &Board, from: Square, king: Piece, out: &mut SquareSet) {
    if king.has_moved {
        return;
    }

    // (rook column, step toward it): kingside, then queenside
    for (rook_col, step) in [(7u8, 1i8), (0u8, -1i8)] {
        let Some(rook_sq) = Square::new(from.row(), rook_col) else {
            continue;
        };
        match board.piece_at(rook_sq) {
            Some(rook)
                if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved => {}
            _ => continue,
        }

        // Squares strictly between king and rook must be vacant.
        let mut path_clear = true;
        let mut cur = from.offset(0, step);
        while let Some(s) = cur {
            if s == rook_sq {
                break;
            }
            if board.piece_at(s).is_some() {
                path_clear = false;
                break;
            }
            cur = s.offset(0, step);
        }
        if !path_clear {
            continue;
        }

        let (Some(mid), Some(to)) = (from.offset(0, step), from.offset(0, 2 * step)) else {
            continue;
        };
        // The rook itself may sit on the would-be destination.
        if board.piece_at(to).is_some() {
            continue;
        }

        if [from, mid, to]
            .into_iter()
            .any(|s| board.is_square_attacked(s, king.color))
        {
            continue;
        }
        out.insert(to);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
