//! Forcing-line puzzle finder
//!
//! Drives a local Stockfish process over UCI to find the longest forcing
//! line from a FEN given on the command line.

mod config;
mod error;
mod stockfish;

use tracing::{error, info};

use puzzle_core::search::find_longest_puzzle;

use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::stockfish::StockfishEngine;

/// Whether White is to move in `fen`. White is the attacking side; when
/// Black is to move the search opens with a defender node.
fn white_to_move(fen: &str) -> Result<bool, FinderError> {
    match fen.split_whitespace().nth(1) {
        Some("w") => Ok(true),
        Some("b") => Ok(false),
        _ => Err(FinderError::InvalidFen(fen.to_string())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "puzzle-finder".to_string());
    let Some(fen) = args.next() else {
        eprintln!("Usage: {program} <FEN>");
        std::process::exit(1);
    };

    let white_attacks = white_to_move(&fen)?;

    let config = FinderConfig::load();
    info!(
        stockfish_path = %config.stockfish_path,
        analysis_depth = config.limits.analysis_depth,
        defense_width = config.limits.defense_width,
        "Finder config loaded"
    );

    let mut engine = match StockfishEngine::new(&config.stockfish_path).await {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "Failed to initialize Stockfish");
            std::process::exit(1);
        }
    };

    info!(fen = %fen, white_attacks, "Searching for longest forcing line");
    let result = find_longest_puzzle(&mut engine, &fen, white_attacks, &config.limits).await;
    engine.quit().await;

    let line = result?;
    if line.is_empty() {
        println!("No valid puzzle continuation found.");
    } else {
        println!("Longest puzzle line ({} half-moves): {line}", line.len());
    }

    Ok(())
}
