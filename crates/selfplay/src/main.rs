//! Self-play CLI
//!
//! Plays the minimax player against itself and reports the games.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use selfplay::{GameRunner, SelfPlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Self-play Runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--games N] [--depth D] [--seed S]");
    println!();
    println!("Options:");
    println!("  --config, -c   TOML settings file (see selfplay.toml)");
    println!("  --games, -g    Number of games");
    println!("  --depth, -d    Search depth in plies");
    println!("  --seed, -s     Base seed for reproducible book choices");
    println!();
    println!("Set RUST_LOG=debug to follow every move.");
}

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    games: Option<u32>,
    depth: Option<u8>,
    seed: Option<u64>,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "help" | "--help" | "-h") {
            parsed.help = true;
            i += 1;
            continue;
        }
        let value = args
            .get(i + 1)
            .with_context(|| format!("{flag} needs a value"))?;
        match flag {
            "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
            "--games" | "-g" => {
                parsed.games = Some(value.parse().with_context(|| format!("bad game count {value:?}"))?)
            }
            "--depth" | "-d" => {
                parsed.depth = Some(value.parse().with_context(|| format!("bad depth {value:?}"))?)
            }
            "--seed" | "-s" => {
                parsed.seed = Some(value.parse().with_context(|| format!("bad seed {value:?}"))?)
            }
            _ => bail!("unknown option {flag}"),
        }
        i += 2;
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            print_usage();
            return Err(e);
        }
    };
    if args.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SelfPlayConfig::load(path)?,
        None => SelfPlayConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        games = config.games,
        depth = config.depth,
        seed,
        "starting self-play"
    );

    let runner = GameRunner::new(config);
    let report = runner.run(seed).context("self-play aborted")?;
    report.print_report();

    if let Some(path) = &runner.config().output {
        report.save(path)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
