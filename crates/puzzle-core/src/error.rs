//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Engine session error: {0}")]
    Session(String),

    #[error("Engine did not report a position after move {0}")]
    MissingFen(String),
}
