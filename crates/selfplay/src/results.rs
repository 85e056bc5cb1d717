//! Self-play results storage and reporting

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::SelfPlayConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// The ply limit ran out
    MaxPlies,
    /// The side to move produced no move in an ongoing position
    NoMove,
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in coordinate notation (`e2e4`)
    pub moves: Vec<String>,
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    /// Moves that came straight from the opening book
    pub book_moves: u32,
    /// Positions searched over the whole game
    pub nodes: u64,
    /// Key of the final position
    pub final_position: String,
}

/// Complete self-play run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayReport {
    pub config: SelfPlayConfig,
    /// Base seed actually used
    pub seed: u64,
    pub games: Vec<GameRecord>,
}

impl SelfPlayReport {
    pub fn new(config: SelfPlayConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            games: Vec::new(),
        }
    }

    /// (white wins, black wins, draws)
    pub fn tally(&self) -> (u32, u32, u32) {
        self.games
            .iter()
            .fold((0, 0, 0), |(w, b, d), game| match game.result {
                GameResult::WhiteWins => (w + 1, b, d),
                GameResult::BlackWins => (w, b + 1, d),
                GameResult::Draw => (w, b, d + 1),
            })
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let (white, black, draws) = self.tally();
        let mut report = String::new();
        report.push_str(&format!(
            "=== Self-play: {} games, depth {}, seed {} ===\n\n",
            self.games.len(),
            self.config.depth,
            self.seed
        ));
        report.push_str(&format!(
            "{:<6} {:<8} {:<10} {:>6} {:>10}\n",
            "Game", "Result", "End", "Plies", "Nodes"
        ));
        report.push_str(&"-".repeat(44));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} {:<8} {:<10} {:>6} {:>10}\n",
                i + 1,
                game.result.as_str(),
                format!("{:?}", game.termination),
                game.plies,
                game.nodes
            ));
        }

        report.push_str(&format!(
            "\nWhite {} - Black {} - Draws {}\n",
            white, black, draws
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
