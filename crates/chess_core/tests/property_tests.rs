//! Whole-board invariants checked over a spread of positions.
//!
//! Positions are every board reachable in two plies from the start plus a
//! handful of hand-picked middlegame and endgame placements. Each position
//! is checked independently, so the sweep fans out with rayon.

use rayon::prelude::*;

use chess_core::{legal_moves, Board, BoardState, Color, Move, Square};

const PLACEMENTS: &[&str] = &[
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b",
    "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w",
    "R5k1/5ppp/8/8/8/8/8/6K1 b",
    "R5k1/5ppp/4n3/8/8/8/8/6K1 b",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w",
    "4k3/8/8/8/8/8/8/4R2K b",
    "k7/2K5/1Q6/8/8/8/8/8 b",
];

fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|(from, _)| legal_moves(board, from).into_iter().map(move |to| Move::new(from, to)))
        .collect()
}

fn positions() -> Vec<Board> {
    let mut out: Vec<Board> = PLACEMENTS
        .iter()
        .map(|p| Board::from_placement(p).expect("valid placement"))
        .collect();

    let start = Board::new();
    out.push(start.clone());
    for mv in all_moves(&start, Color::White) {
        let mut b1 = start.clone();
        b1.move_piece(mv.from, mv.to).expect("generated move applies");
        b1.pass_turn();
        for reply in all_moves(&b1, Color::Black) {
            let mut b2 = b1.clone();
            b2.move_piece(reply.from, reply.to).expect("generated move applies");
            b2.pass_turn();
            out.push(b2);
        }
        out.push(b1);
    }
    out
}

fn every_square() -> impl Iterator<Item = Square> {
    (0..64u8).filter_map(Square::from_index)
}

#[test]
fn legal_moves_never_hit_own_color() {
    positions().par_iter().for_each(|board| {
        for (from, pc) in board.occupied() {
            for to in legal_moves(board, from) {
                if let Some(target) = board.piece_at(to) {
                    assert_ne!(target.color, pc.color, "{from}->{to} on\n{board}");
                }
            }
        }
    });
}

#[test]
fn rejected_moves_leave_board_unchanged() {
    positions().par_iter().for_each(|board| {
        for (from, _) in board.occupied() {
            let legal = legal_moves(board, from);
            for to in every_square().filter(|&to| !legal.contains(to)) {
                let mut copy = board.clone();
                assert!(copy.move_piece(from, to).is_err());
                assert_eq!(&copy, board);
            }
        }
    });
}

#[test]
fn make_unmake_round_trips() {
    positions().par_iter().for_each(|board| {
        for color in [Color::White, Color::Black] {
            for mv in all_moves(board, color) {
                let mut copy = board.clone();
                let undo = copy.move_piece(mv.from, mv.to).expect("legal move applies");
                assert_ne!(&copy, board);
                copy.unmake_move(undo);
                assert_eq!(&copy, board, "round trip of {mv} failed");
            }
        }
    });
}

#[test]
fn checkmate_means_every_move_leaves_king_attacked() {
    positions().par_iter().for_each(|board| {
        if board.state() != BoardState::Checkmate {
            return;
        }
        let mover = board.turn();
        for mv in all_moves(board, mover) {
            let mut copy = board.clone();
            copy.move_piece(mv.from, mv.to).expect("legal move applies");
            assert!(copy.in_check(mover), "{mv} escapes a reported mate");
        }
    });
}

#[test]
fn sweep_finds_the_known_mates() {
    let mates = positions()
        .iter()
        .filter(|b| b.state() == BoardState::Checkmate)
        .count();
    // Fool's mate and the back-rank mate
    assert_eq!(mates, 2);
}
