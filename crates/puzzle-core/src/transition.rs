//! Engine-mediated position transitions
//!
//! The search never derives a FEN by hand; the engine applies the move and
//! reports the exact notation of the resulting position via its `d` command.

use crate::error::PuzzleError;
use crate::session::UciSession;

/// Apply `uci` to `fen` and return the engine's FEN for the new position.
///
/// A minimal throwaway search is issued first so any analysis output still
/// queued from a previous command is drained before the `d` report is read.
/// If the engine never prints a `Fen:` line the transition fails with
/// [`PuzzleError::MissingFen`] — substituting the unchanged input position
/// would leave the search looping on a stale FEN.
pub async fn apply_move<S: UciSession>(
    session: &mut S,
    fen: &str,
    uci: &str,
) -> Result<String, PuzzleError> {
    session.send(&format!("position fen {fen}")).await?;
    session.send("go depth 1 movetime 1").await?;
    session.read_until("bestmove").await?;

    session.send(&format!("position fen {fen} moves {uci}")).await?;
    session.send("d").await?;
    let output = session.read_until("Fen:").await?;

    extract_fen(&output)
        .map(str::to_string)
        .ok_or_else(|| PuzzleError::MissingFen(uci.to_string()))
}

/// Pull the FEN out of the engine's board report
fn extract_fen(output: &str) -> Option<&str> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Fen:"))
        .map(str::trim)
        .filter(|fen| !fen.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_fen_from_board_report() {
        let output = "\
 +---+---+---+---+---+---+---+---+
 | r | n | b | q | k | b | n | r |
 +---+---+---+---+---+---+---+---+

Fen: rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1
Key: 823C9B2FA1270E9C";
        assert_eq!(
            extract_fen(output),
            Some("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
        );
    }

    #[test]
    fn test_missing_fen_line_is_none() {
        assert_eq!(extract_fen("Checkers: \nKey: 1234\n"), None);
        assert_eq!(extract_fen(""), None);
    }

    #[test]
    fn test_empty_fen_field_is_none() {
        assert_eq!(extract_fen("Fen:   \n"), None);
    }
}
