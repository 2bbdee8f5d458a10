//! Multi-variation analysis and engine output parsing

use serde::Serialize;
use tracing::debug;

use crate::error::PuzzleError;
use crate::limits::MATE_CP;
use crate::session::UciSession;

/// One candidate move with its evaluation from the mover's perspective
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMove {
    /// Move in UCI notation
    pub uci: String,
    /// Centipawn score; forced mates are clamped to [`MATE_CP`] with the
    /// mating side's sign
    pub cp: i32,
}

/// Fields of one `info` line that the parser cares about
#[derive(Debug)]
struct InfoLine {
    depth: u32,
    multipv: u32,
    cp: i32,
    uci: String,
}

/// Analyze `fen` with `multipv` principal variations at fixed `depth`.
///
/// Returns the candidates in MultiPV index order (index 1 first). An engine
/// that reports no usable variation lines yields an empty list, not an
/// error — the position simply has no ranked move.
pub async fn evaluate<S: UciSession>(
    session: &mut S,
    fen: &str,
    multipv: u32,
    depth: u32,
) -> Result<Vec<CandidateMove>, PuzzleError> {
    session
        .send(&format!("setoption name MultiPV value {multipv}"))
        .await?;
    session.send(&format!("position fen {fen}")).await?;
    session.send(&format!("go depth {depth}")).await?;

    let output = session.read_until("bestmove").await?;
    let candidates = parse_analysis(&output, multipv);
    debug!(fen, multipv, count = candidates.len(), "Position analyzed");
    Ok(candidates)
}

/// Analyze `fen` and return the top `n` candidates sorted by evaluation,
/// best first. Ties keep the engine's MultiPV order.
pub async fn top_moves<S: UciSession>(
    session: &mut S,
    fen: &str,
    n: u32,
    depth: u32,
) -> Result<Vec<CandidateMove>, PuzzleError> {
    let mut candidates = evaluate(session, fen, n, depth).await?;
    candidates.sort_by_key(|c| std::cmp::Reverse(c.cp));
    candidates.truncate(n as usize);
    Ok(candidates)
}

/// Extract per-variation candidates from raw `go` output.
///
/// The engine interleaves progress lines from successive iterations; only
/// the frontier counts. We track the maximum depth seen so far and record a
/// line only when it reports exactly that depth, superseding any earlier
/// entry for the same MultiPV slot. A shallow line arriving out of order
/// after a deeper one has been seen is ignored, so a late depth-12 report
/// can never clobber the depth-20 result for its slot.
pub fn parse_analysis(output: &str, multipv: u32) -> Vec<CandidateMove> {
    let mut slots: Vec<Option<CandidateMove>> = vec![None; multipv as usize];
    let mut max_depth = 0u32;

    for line in output.lines() {
        if line.contains("bestmove") {
            break;
        }
        let Some(info) = parse_info_line(line) else {
            continue;
        };
        if info.multipv < 1 || info.multipv > multipv {
            continue;
        }
        if info.depth > max_depth {
            max_depth = info.depth;
        }
        if info.depth == max_depth {
            slots[(info.multipv - 1) as usize] = Some(CandidateMove {
                uci: info.uci,
                cp: info.cp,
            });
        }
    }

    slots.into_iter().flatten().collect()
}

/// Parse one engine progress line, or `None` if it is not a scored
/// variation report.
fn parse_info_line(line: &str) -> Option<InfoLine> {
    if !line.starts_with("info") || !line.contains("score") {
        return None;
    }

    let depth = token_value(line, "depth")?;
    let multipv = token_value(line, "multipv")?;
    let cp = parse_score(line)?;
    let uci = first_pv_move(line)?.to_string();

    Some(InfoLine {
        depth,
        multipv,
        cp,
        uci,
    })
}

/// Numeric value following the first `key` token
fn token_value<T: std::str::FromStr>(line: &str, key: &str) -> Option<T> {
    let mut tokens = line.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == key {
            return tokens.next().and_then(|v| v.parse().ok());
        }
    }
    None
}

/// Decode `score cp <C>` verbatim, or clamp `score mate <M>` to the mate
/// sentinel preserving which side is mating
fn parse_score(line: &str) -> Option<i32> {
    if let Some(cp) = token_value::<i32>(line, "cp") {
        return Some(cp);
    }
    token_value::<i32>(line, "mate").map(|m| if m > 0 { MATE_CP } else { -MATE_CP })
}

/// First move token of the principal variation
fn first_pv_move(line: &str) -> Option<&str> {
    let mut tokens = line.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "pv" {
            return tokens.next();
        }
    }
    None
}
