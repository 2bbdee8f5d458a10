//! Position transitions through a scripted engine session.

mod common;

use common::{fen_report, flush_response, ScriptedSession};
use puzzle_core::transition::apply_move;
use puzzle_core::PuzzleError;

const BEFORE: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const AFTER: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

#[tokio::test]
async fn test_apply_move_returns_engine_reported_fen() {
    let mut session = ScriptedSession::new([flush_response("e2e4"), fen_report(AFTER)]);

    let fen = apply_move(&mut session, BEFORE, "e2e4").await.unwrap();
    assert_eq!(fen, AFTER);

    assert_eq!(
        session.sent,
        vec![
            format!("position fen {BEFORE}"),
            "go depth 1 movetime 1".to_string(),
            format!("position fen {BEFORE} moves e2e4"),
            "d".to_string(),
        ]
    );
    assert_eq!(session.remaining(), 0);
}

#[tokio::test]
async fn test_apply_move_fails_when_engine_omits_fen() {
    // The board report reaches the marker line but carries no notation
    let mut session = ScriptedSession::new([flush_response("e2e4"), "Fen: \n".to_string()]);

    let result = apply_move(&mut session, BEFORE, "e2e4").await;
    assert!(matches!(result, Err(PuzzleError::MissingFen(mv)) if mv == "e2e4"));
}

#[tokio::test]
async fn test_apply_move_fails_when_stream_ends_early() {
    // Engine dies after the flush search, before the board report
    let mut session = ScriptedSession::new([flush_response("e2e4"), "Key: 1234\n".to_string()]);

    let result = apply_move(&mut session, BEFORE, "e2e4").await;
    assert!(matches!(result, Err(PuzzleError::Session(_))));
}
