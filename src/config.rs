//! Runtime configuration read from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the uniform piece randomizer
    pub seed: u32,
    /// Frame cadence while a game is running
    pub tick_ms: u32,
    /// JSON-lines session log; `None` disables logging
    pub log_path: Option<String>,
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS,
            log_path: None,
            start_paused: false,
        }
    }
}

impl Config {
    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: piece randomizer seed (default: system clock)
    /// - `TETRIS_TICK_MS`: frame cadence, at least 1 (default: 33)
    /// - `TETRIS_LOG_PATH`: session log file (default: none)
    /// - `TETRIS_START_PAUSED`: `1` or `true` to start paused
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let start_paused = lookup("TETRIS_START_PAUSED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            tick_ms,
            log_path,
            start_paused,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
