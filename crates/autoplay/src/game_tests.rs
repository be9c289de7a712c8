use super::*;
use crate::driver::apply_move;
use greedy_engine::GreedyEngine;
use lookahead_engine::LookaheadEngine;

fn drivers(seed: u64) -> (TurnDriver, TurnDriver) {
    (
        TurnDriver::new(Box::new(LookaheadEngine::with_seed(seed))),
        TurnDriver::new(Box::new(GreedyEngine::with_seed(seed + 1))),
    )
}

#[test]
fn self_play_completes_and_replays() {
    let (mut white, mut black) = drivers(7);
    let runner = GameRunner::new(40);
    let record = runner.play(&mut white, &mut black).unwrap();

    assert!(record.moves.len() <= 40);
    if record.outcome == GameOutcome::MoveLimit {
        assert_eq!(record.moves.len(), 40);
    }

    // The recorded moves are a legal, alternating game.
    let mut replay = Board::new();
    for mv in &record.moves {
        apply_move(&mut replay, mv.from, mv.to).unwrap();
    }
    assert_eq!(replay, record.final_board);
}

#[test]
fn observer_sees_every_ply() {
    let (mut white, mut black) = drivers(3);
    let runner = GameRunner::new(10);
    let mut seen = Vec::new();
    let record = runner
        .play_from(Board::new(), &mut white, &mut black, |board, mv| {
            seen.push((mv, board.turn()));
        })
        .unwrap();

    assert_eq!(seen.len(), record.moves.len());
    if let Some((_, turn)) = seen.first() {
        assert_eq!(*turn, Color::Black);
    }
}

#[test]
fn game_already_mated_ends_immediately() {
    let board =
        Board::from_placement("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w").unwrap();
    let (mut white, mut black) = drivers(1);
    let record = GameRunner::default()
        .play_from(board, &mut white, &mut black, |_, _| {})
        .unwrap();

    assert_eq!(record.outcome, GameOutcome::Checkmate { winner: Color::Black });
    assert_eq!(record.outcome.winner(), Some(Color::Black));
    assert!(record.moves.is_empty());
}

#[test]
fn missing_king_is_reported_as_captured() {
    let board = Board::from_placement("4k3/8/8/8/8/8/8/8 w").unwrap();
    let (mut white, mut black) = drivers(1);
    let record = GameRunner::default()
        .play_from(board, &mut white, &mut black, |_, _| {})
        .unwrap();

    assert_eq!(record.outcome, GameOutcome::KingCaptured { winner: Color::Black });
}

#[test]
fn boxed_in_side_has_no_moves() {
    let board = Board::from_placement("KP6/PP6/8/8/8/8/8/7k w").unwrap();
    let (mut white, mut black) = drivers(1);
    let record = GameRunner::default()
        .play_from(board, &mut white, &mut black, |_, _| {})
        .unwrap();

    assert_eq!(record.outcome, GameOutcome::NoMoves { side: Color::White });
    assert_eq!(record.outcome.winner(), None);
}

#[test]
fn greedy_takes_a_hanging_queen_in_play() {
    let board = Board::from_placement("4k3/8/8/3q4/8/8/8/3RK3 w").unwrap();
    let mut white = TurnDriver::new(Box::new(GreedyEngine::with_seed(5)));
    let mut black = TurnDriver::new(Box::new(GreedyEngine::with_seed(6)));
    let record = GameRunner::new(1)
        .play_from(board, &mut white, &mut black, |_, _| {})
        .unwrap();

    assert_eq!(record.outcome, GameOutcome::MoveLimit);
    assert_eq!(record.moves[0].to.to_algebraic(), "d5");
}
