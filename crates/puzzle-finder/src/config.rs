//! Finder configuration from environment variables

use std::env;
use std::str::FromStr;

use puzzle_core::SearchLimits;

#[derive(Clone, Debug)]
pub struct FinderConfig {
    /// Path to the Stockfish binary
    pub stockfish_path: String,

    /// Search tuning handed to the puzzle search
    pub limits: SearchLimits,
}

impl FinderConfig {
    /// Load configuration from environment variables, keeping the built-in
    /// defaults for anything unset or unparsable.
    pub fn load() -> Self {
        let stockfish_path =
            env::var("STOCKFISH_PATH").unwrap_or_else(|_| "/usr/games/stockfish".to_string());

        let defaults = SearchLimits::default();
        let limits = SearchLimits {
            analysis_depth: env_or("ANALYSIS_DEPTH", defaults.analysis_depth),
            defense_width: env_or("DEFENSE_WIDTH", defaults.defense_width),
            max_plies: env_or("MAX_SEARCH_PLIES", defaults.max_plies),
            winning_threshold: env_or("WINNING_THRESHOLD", defaults.winning_threshold),
        };

        Self {
            stockfish_path,
            limits,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_parses_valid_values() {
        env::set_var("PUZZLE_TEST_DEPTH", "14");
        assert_eq!(env_or("PUZZLE_TEST_DEPTH", 20u32), 14);
        env::remove_var("PUZZLE_TEST_DEPTH");
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        env::set_var("PUZZLE_TEST_GARBAGE", "twenty");
        assert_eq!(env_or("PUZZLE_TEST_GARBAGE", 20u32), 20);
        env::remove_var("PUZZLE_TEST_GARBAGE");
    }

    #[test]
    fn test_env_or_falls_back_when_unset() {
        assert_eq!(env_or("PUZZLE_TEST_UNSET", 150i32), 150);
    }
}
