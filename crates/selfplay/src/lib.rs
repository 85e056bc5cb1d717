//! Self-play Runner for the minimax player
//!
//! This crate provides infrastructure for:
//! - Playing the automated player against itself from the initial position
//! - Loading run settings from TOML
//! - Writing per-game records as a JSON report
//!
//! # Usage
//!
//! ```bash
//! # Four games at depth 3 with a fixed seed
//! cargo run --release -p selfplay -- --games 4 --depth 3 --seed 7
//!
//! # Settings from a file, overridden on the command line
//! cargo run --release -p selfplay -- --config crates/selfplay/selfplay.toml --games 1
//! ```

mod config;
mod game_runner;
mod results;

pub use config::*;
pub use game_runner::*;
pub use results::*;
