//! Forcing-move detection

use crate::eval::CandidateMove;

/// Decide whether a position has exactly one winning move.
///
/// `candidates` is the engine's top two variations in MultiPV order, so the
/// first entry is already the engine's best move. The position is a puzzle
/// step only if that move clears `threshold` while the runner-up (when one
/// exists) stays below it — two comparably good attacking moves make the
/// step ambiguous, not forcing.
pub fn forcing_move(candidates: &[CandidateMove], threshold: i32) -> Option<String> {
    let best = candidates.first()?;
    if best.cp < threshold {
        return None;
    }
    match candidates.get(1) {
        Some(second) if second.cp >= threshold => None,
        _ => Some(best.uci.clone()),
    }
}
