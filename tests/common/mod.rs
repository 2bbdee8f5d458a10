#![allow(dead_code)]

use std::collections::VecDeque;

use puzzle_core::session::UciSession;
use puzzle_core::PuzzleError;

/// Replays canned engine output, one response per `read_until` call, and
/// records every command sent. A response that lacks the requested marker
/// behaves like the engine closing its pipe mid-read.
pub struct ScriptedSession {
    pub sent: Vec<String>,
    responses: VecDeque<String>,
}

impl ScriptedSession {
    pub fn new<I, T>(responses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            sent: Vec::new(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Responses the code under test has not consumed yet
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl UciSession for ScriptedSession {
    async fn send(&mut self, command: &str) -> Result<(), PuzzleError> {
        self.sent.push(command.to_string());
        Ok(())
    }

    async fn read_until(&mut self, marker: &str) -> Result<String, PuzzleError> {
        let response = self.responses.pop_front().ok_or_else(|| {
            PuzzleError::Session(format!("script exhausted waiting for {marker}"))
        })?;
        if response.contains(marker) {
            Ok(response)
        } else {
            Err(PuzzleError::Session(format!("stream ended before {marker}")))
        }
    }
}

/// A full `go` response: one info line per (multipv, cp, move) triple
/// followed by the bestmove marker.
pub fn eval_response(entries: &[(u32, i32, &str)], best: &str) -> String {
    let mut out = String::new();
    for (multipv, cp, uci) in entries {
        out.push_str(&format!(
            "info depth 20 seldepth 26 multipv {multipv} score cp {cp} nodes 10000 nps 500000 pv {uci}\n"
        ));
    }
    out.push_str(&format!("bestmove {best}\n"));
    out
}

/// The tail of a `d` board report carrying the position's FEN
pub fn fen_report(fen: &str) -> String {
    format!("Fen: {fen}\nKey: 5DEC7FA1\nCheckers:\n")
}

/// The throwaway `go depth 1 movetime 1` response used to flush state
pub fn flush_response(best: &str) -> String {
    format!("info depth 1 seldepth 1 multipv 1 score cp 0 nodes 20 pv {best}\nbestmove {best}\n")
}
