//! Engine session abstraction

use crate::error::PuzzleError;

/// One exclusively-owned conversation with a running UCI engine.
///
/// The engine holds a single position context at a time, so a caller must
/// finish one command/response exchange before starting the next; taking
/// `&mut self` on both operations makes that sequencing a compile-time
/// guarantee. Reaching end-of-stream before the requested marker means the
/// engine died and is reported as [`PuzzleError::Session`].
#[allow(async_fn_in_trait)]
pub trait UciSession {
    /// Write one newline-terminated command to the engine.
    async fn send(&mut self, command: &str) -> Result<(), PuzzleError>;

    /// Read lines until one contains `marker`, returning everything read
    /// up to and including the marker line.
    async fn read_until(&mut self, marker: &str) -> Result<String, PuzzleError>;
}
