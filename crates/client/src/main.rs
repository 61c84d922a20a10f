//! Barter market terminal client.
//!
//! Loads market content (built-in, or from `--data-dir` / `BARTER_DATA_DIR`),
//! opens a [`barter_runtime::GameSession`], and runs one of the subcommands.
//!
//! ```bash
//! barter play
//! barter --data-dir ./my-market walkthrough
//! RUST_LOG=runtime::session=debug barter play
//! ```

mod commands;
mod config;
mod logging;
mod render;
mod repl;

use std::path::PathBuf;

use anyhow::{Context, Result};
use barter_content::{ContentFactory, MarketContent};
use clap::Parser;
use commands::{Play, Snapshot, Walkthrough};
use config::ClientConfig;

/// Trade your way from grain and wood to a stone axe
#[derive(Parser)]
#[command(name = "barter")]
#[command(about = "A primitive-market barter game", long_about = None)]
#[command(version)]
struct Cli {
    /// Load config.toml, items.ron and npcs.ron from this directory
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play interactively
    Play(Play),

    /// Replay the hint chain from grain and wood to the axe
    Walkthrough(Walkthrough),

    /// Print the opening state as JSON
    Snapshot(Snapshot),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BARTER_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging()?;

    let config = ClientConfig::from_env().with_data_dir(cli.data_dir);
    let content = load_content(&config)?;

    match cli.command {
        Command::Play(cmd) => cmd.execute(content),
        Command::Walkthrough(cmd) => cmd.execute(content),
        Command::Snapshot(cmd) => cmd.execute(content),
    }
}

fn load_content(config: &ClientConfig) -> Result<MarketContent> {
    match &config.data_dir {
        Some(dir) => {
            tracing::info!("Loading market from {}", dir.display());
            ContentFactory::new(dir).load_all()
        }
        None => {
            tracing::debug!("Using built-in market");
            MarketContent::builtin()
        }
    }
    .context("Failed to load market content")
}
