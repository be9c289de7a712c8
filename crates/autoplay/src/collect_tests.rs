use super::*;
use std::collections::HashSet;

#[test]
fn startpos_has_twenty_candidates_each_side() {
    let board = Board::new();
    assert_eq!(collect_candidates(&board, Color::White, false).len(), 20);
    assert_eq!(collect_candidates(&board, Color::Black, false).len(), 20);
}

#[test]
fn parallel_and_sequential_agree() {
    let board =
        Board::from_placement("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w").unwrap();
    for color in [Color::White, Color::Black] {
        let seq = collect_candidates(&board, color, false);
        let par = collect_candidates(&board, color, true);
        assert_eq!(seq.len(), par.len());
        let seq_set: HashSet<Move> = seq.into_iter().collect();
        let par_set: HashSet<Move> = par.into_iter().collect();
        assert_eq!(seq_set, par_set);
    }
}

#[test]
fn candidates_only_start_on_own_pieces() {
    let board = Board::new();
    for mv in collect_candidates(&board, Color::Black, true) {
        assert_eq!(board.piece_at(mv.from).map(|p| p.color), Some(Color::Black));
    }
}

#[test]
fn side_without_pieces_has_no_candidates() {
    let board = Board::from_placement("8/8/8/8/8/8/8/4K3 w").unwrap();
    assert!(collect_candidates(&board, Color::Black, true).is_empty());
    assert_eq!(collect_candidates(&board, Color::White, true).len(), 5);
}
