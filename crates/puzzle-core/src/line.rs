//! Puzzle line data model

use std::fmt;

use serde::Serialize;

/// One forcing continuation from a root position, as UCI moves.
///
/// An empty line means "no forcing continuation found here" — it is a
/// normal search outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PuzzleLine {
    pub moves: Vec<String>,
}

impl PuzzleLine {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Length in half-moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Prepend `head` to `continuation`
    pub fn with_head(head: &str, continuation: PuzzleLine) -> Self {
        let mut moves = Vec::with_capacity(1 + continuation.moves.len());
        moves.push(head.to_string());
        moves.extend(continuation.moves);
        Self { moves }
    }
}

impl fmt::Display for PuzzleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_head_prepends_and_counts_half_moves() {
        let continuation = PuzzleLine {
            moves: vec!["e8d8".to_string(), "d1d8".to_string()],
        };
        let line = PuzzleLine::with_head("h5f7", continuation);
        assert_eq!(line.len(), 3);
        assert_eq!(line.to_string(), "h5f7 e8d8 d1d8");
    }

    #[test]
    fn test_empty_line() {
        let line = PuzzleLine::empty();
        assert!(line.is_empty());
        assert_eq!(line.len(), 0);
        assert_eq!(line.to_string(), "");
    }

    #[test]
    fn test_serializes_as_move_list() {
        let line = PuzzleLine::with_head("g1f3", PuzzleLine::empty());
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json, serde_json::json!({ "moves": ["g1f3"] }));
    }
}
