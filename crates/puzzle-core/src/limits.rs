//! Search tuning constants

/// Engine search depth in plies for every analysis query
pub const ANALYSIS_DEPTH: u32 = 20;

/// Minimum evaluation for a move to count as winning (centipawns)
pub const WINNING_THRESHOLD: i32 = 150;

/// MultiPV width for the forcing check. Must stay at 2: the check is
/// "exactly one move clears the threshold", which only ever needs the
/// best alternative. Widening it would change puzzle semantics.
pub const FORCING_MULTIPV: u32 = 2;

/// Number of defender candidate moves to expand at each defender node
pub const DEFENSE_WIDTH: u32 = 5;

/// Recursion cap in half-moves
pub const MAX_SEARCH_PLIES: u32 = 40;

/// Capacity of the per-path position history
pub const MAX_VISITED_POSITIONS: usize = 100;

/// Sentinel magnitude for forced-mate scores (centipawns)
pub const MATE_CP: i32 = 10_000;

/// Tunables threaded through the search.
///
/// `winning_threshold` and the forcing check's MultiPV width are deliberately
/// separate knobs from `defense_width`; see [`FORCING_MULTIPV`].
#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Engine search depth per analysis query (plies)
    pub analysis_depth: u32,

    /// Defender candidate moves tried per defender node
    pub defense_width: u32,

    /// Maximum recursion depth in half-moves
    pub max_plies: u32,

    /// Centipawn threshold for a move to count as winning
    pub winning_threshold: i32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            analysis_depth: ANALYSIS_DEPTH,
            defense_width: DEFENSE_WIDTH,
            max_plies: MAX_SEARCH_PLIES,
            winning_threshold: WINNING_THRESHOLD,
        }
    }
}
