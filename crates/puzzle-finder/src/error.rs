//! Finder error types

use puzzle_core::PuzzleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Stockfish error: {0}")]
    Stockfish(String),

    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Engine error: {0}")]
    Engine(#[from] PuzzleError),
}
