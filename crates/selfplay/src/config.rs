//! Self-play configuration, read from TOML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use classical_engine::DEFAULT_QUIESCENCE_DEPTH;

/// Settings for a batch of self-play games
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: u32,
    /// Nominal search depth in plies
    pub depth: u8,
    /// Captures-only plies below the nominal depth
    pub quiescence_depth: u8,
    /// Plies after which an unfinished game is abandoned as a draw
    pub max_plies: u32,
    /// Base seed for the players' random sources (None = pick one)
    pub seed: Option<u64>,
    /// Let the players use the opening book
    pub use_book: bool,
    /// Where to write the JSON report
    pub output: Option<PathBuf>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 2,
            depth: 3,
            quiescence_depth: DEFAULT_QUIESCENCE_DEPTH,
            max_plies: 200,
            seed: None,
            use_book: true,
            output: None,
        }
    }
}

impl SelfPlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid self-play configuration")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
