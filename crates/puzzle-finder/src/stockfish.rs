//! Stockfish engine wrapper using UCI protocol (async I/O)

use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::debug;

use puzzle_core::session::UciSession;
use puzzle_core::PuzzleError;

use crate::error::FinderError;

/// Stockfish engine instance
pub struct StockfishEngine {
    process: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl StockfishEngine {
    /// Spawn a new Stockfish process and initialize UCI
    pub async fn new(path: &str) -> Result<Self, FinderError> {
        let mut process = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| FinderError::Stockfish(format!("Failed to spawn Stockfish: {e}")))?;

        let stdin = process.stdin.take().unwrap();
        let stdout = BufReader::new(process.stdout.take().unwrap());

        let mut engine = Self {
            process,
            stdin,
            stdout,
        };

        // Initialize UCI
        engine.write_line("uci").await?;
        engine.wait_for("uciok").await?;

        // Configure for single-session analysis
        engine.write_line("setoption name Threads value 1").await?;
        engine.write_line("setoption name MultiPV value 2").await?;
        engine.write_line("isready").await?;
        engine.wait_for("readyok").await?;

        Ok(engine)
    }

    /// Write one command line to Stockfish
    async fn write_line(&mut self, command: &str) -> Result<(), PuzzleError> {
        debug!(command, "SF <");
        self.stdin
            .write_all(format!("{command}\n").as_bytes())
            .await
            .map_err(|e| PuzzleError::Session(format!("Failed to write to Stockfish: {e}")))?;
        self.stdin
            .flush()
            .await
            .map_err(|e| PuzzleError::Session(format!("Failed to flush stdin: {e}")))?;
        Ok(())
    }

    /// Read one line from Stockfish, returning the byte count (0 = EOF)
    async fn next_line(&mut self, line: &mut String) -> Result<usize, PuzzleError> {
        line.clear();
        self.stdout
            .read_line(line)
            .await
            .map_err(|e| PuzzleError::Session(format!("Failed to read from Stockfish: {e}")))
    }

    /// Wait for a specific response line during the handshake
    async fn wait_for(&mut self, expected: &str) -> Result<(), PuzzleError> {
        let mut line = String::new();
        loop {
            if self.next_line(&mut line).await? == 0 {
                return Err(PuzzleError::Session(format!(
                    "Stockfish exited before {expected}"
                )));
            }
            let trimmed = line.trim();
            debug!(line = trimmed, "SF >");
            if trimmed == expected {
                return Ok(());
            }
        }
    }

    /// Send quit command and wait for process to exit
    pub async fn quit(&mut self) {
        let _ = self.write_line("quit").await;
        let _ = self.process.wait().await;
    }
}

impl UciSession for StockfishEngine {
    async fn send(&mut self, command: &str) -> Result<(), PuzzleError> {
        self.write_line(command).await
    }

    async fn read_until(&mut self, marker: &str) -> Result<String, PuzzleError> {
        let mut output = String::new();
        let mut line = String::new();
        loop {
            if self.next_line(&mut line).await? == 0 {
                return Err(PuzzleError::Session(format!(
                    "Stockfish exited before reporting {marker}"
                )));
            }
            debug!(line = line.trim_end(), "SF >");
            output.push_str(&line);
            if line.contains(marker) {
                return Ok(output);
            }
        }
    }
}

impl Drop for StockfishEngine {
    fn drop(&mut self) {
        // Best-effort synchronous kill in drop
        let _ = self.process.start_kill();
    }
}
