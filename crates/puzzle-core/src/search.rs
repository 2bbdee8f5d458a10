//! Longest forcing line search
//!
//! Recursive descent alternating two roles: at attacker nodes the position
//! must have exactly one winning move or the line ends; at defender nodes
//! the engine's top candidates are each tried and the one stretching the
//! line furthest is kept. Termination is guaranteed by the half-move cap
//! together with repetition pruning along the current path.

use std::collections::BTreeSet;

use futures::future::LocalBoxFuture;
use tracing::debug;

use crate::classify::forcing_move;
use crate::error::PuzzleError;
use crate::eval::{evaluate, top_moves};
use crate::limits::{SearchLimits, FORCING_MULTIPV, MAX_VISITED_POSITIONS};
use crate::line::PuzzleLine;
use crate::session::UciSession;
use crate::transition::apply_move;

/// Signatures of the positions on the path from the root to the current
/// node.
///
/// Cloned at every branch into a child, so sibling branches never observe
/// each other's history — a repetition only counts against a line's own
/// ancestors.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet(BTreeSet<String>);

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, fen: &str) -> bool {
        self.0.contains(&position_signature(fen))
    }

    /// An independent copy of this set extended with `fen`, for one child
    /// branch
    pub fn extended(&self, fen: &str) -> Self {
        let mut next = self.clone();
        next.0.insert(position_signature(fen));
        next
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Board layout plus side to move. Castling rights, en-passant square and
/// the move counters are dropped so that transpositions differing only in
/// bookkeeping still count as repeats.
pub fn position_signature(fen: &str) -> String {
    let mut fields = fen.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(board), Some(turn)) => format!("{board} {turn}"),
        (Some(board), None) => board.to_string(),
        _ => String::new(),
    }
}

/// Find the longest forcing line from `fen`.
///
/// `attacker_to_move` says whether the side to move at the root is the one
/// that must produce forcing moves; the CLI derives it from the FEN's turn
/// field. The returned line is empty when the root offers no forcing
/// continuation at all.
pub async fn find_longest_puzzle<S: UciSession>(
    session: &mut S,
    fen: &str,
    attacker_to_move: bool,
    limits: &SearchLimits,
) -> Result<PuzzleLine, PuzzleError> {
    search_node(
        session,
        fen.to_string(),
        attacker_to_move,
        0,
        VisitedSet::new(),
        limits,
    )
    .await
}

/// One recursion level. Boxed because an `async fn` cannot await itself
/// directly.
fn search_node<'a, S: UciSession>(
    session: &'a mut S,
    fen: String,
    attacker_to_move: bool,
    depth: u32,
    visited: VisitedSet,
    limits: &'a SearchLimits,
) -> LocalBoxFuture<'a, Result<PuzzleLine, PuzzleError>> {
    Box::pin(async move {
        if depth >= limits.max_plies {
            debug!(depth, "Half-move cap reached, line ends");
            return Ok(PuzzleLine::empty());
        }
        if visited.len() >= MAX_VISITED_POSITIONS {
            debug!(depth, "Path history full, line ends");
            return Ok(PuzzleLine::empty());
        }
        if visited.contains(&fen) {
            debug!(fen = %fen, "Position repeats an ancestor, line ends");
            return Ok(PuzzleLine::empty());
        }

        if attacker_to_move {
            attacker_node(session, fen, depth, visited, limits).await
        } else {
            defender_node(session, fen, depth, visited, limits).await
        }
    })
}

/// Attacker to move: the line continues only through a unique winning move.
async fn attacker_node<S: UciSession>(
    session: &mut S,
    fen: String,
    depth: u32,
    visited: VisitedSet,
    limits: &SearchLimits,
) -> Result<PuzzleLine, PuzzleError> {
    let candidates = evaluate(session, &fen, FORCING_MULTIPV, limits.analysis_depth).await?;
    let Some(winning) = forcing_move(&candidates, limits.winning_threshold) else {
        debug!(fen = %fen, "No single winning move");
        return Ok(PuzzleLine::empty());
    };

    let next_fen = apply_move(session, &fen, &winning).await?;
    let continuation = search_node(
        session,
        next_fen,
        false,
        depth + 1,
        visited.extended(&fen),
        limits,
    )
    .await?;

    Ok(PuzzleLine::with_head(&winning, continuation))
}

/// Defender to move: try the top candidates and keep the one whose
/// continuation is strictly longest. Ties keep the earlier candidate, i.e.
/// the one the engine ranked higher. When no candidate leads to a forcing
/// follow-up the defender node contributes nothing.
async fn defender_node<S: UciSession>(
    session: &mut S,
    fen: String,
    depth: u32,
    visited: VisitedSet,
    limits: &SearchLimits,
) -> Result<PuzzleLine, PuzzleError> {
    let candidates = top_moves(session, &fen, limits.defense_width, limits.analysis_depth).await?;
    for candidate in &candidates {
        debug!(uci = %candidate.uci, cp = candidate.cp, "Defender option");
    }

    let mut best: Option<(String, PuzzleLine)> = None;
    for candidate in candidates {
        let next_fen = apply_move(session, &fen, &candidate.uci).await?;
        let continuation = search_node(
            session,
            next_fen,
            true,
            depth + 1,
            visited.extended(&fen),
            limits,
        )
        .await?;
        debug!(
            uci = %candidate.uci,
            length = continuation.len(),
            "Defender branch searched"
        );

        let best_len = best.as_ref().map_or(0, |(_, line)| line.len());
        if continuation.len() > best_len {
            best = Some((candidate.uci, continuation));
        }
    }

    Ok(match best {
        Some((uci, continuation)) => PuzzleLine::with_head(&uci, continuation),
        None => PuzzleLine::empty(),
    })
}
