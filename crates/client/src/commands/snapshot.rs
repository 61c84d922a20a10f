//! Print the opening state as JSON.

use anyhow::{Context, Result};
use barter_content::MarketContent;
use barter_runtime::GameSession;
use clap::Parser;

/// Print the opening state as JSON
#[derive(Parser)]
pub struct Snapshot {}

impl Snapshot {
    pub fn execute(self, content: MarketContent) -> Result<()> {
        let session = GameSession::new(content)?;
        let json = session
            .snapshot_json()
            .context("Failed to serialize state to JSON")?;
        println!("{json}");
        Ok(())
    }
}
