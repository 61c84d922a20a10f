//! Content factory for building a market from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use barter_core::{GameConfig, ItemCatalog, ItemDefinition, NpcRoster, NpcTemplate};

use crate::MarketContent;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, NpcLoader};

/// Content factory that loads all market content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── npcs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load NPC templates from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<NpcTemplate>> {
        let path = self.data_dir.join("npcs.ron");
        NpcLoader::load(&path)
    }

    /// Load and cross-validate the whole market.
    pub fn load_all(&self) -> LoadResult<MarketContent> {
        let config = self.load_config()?;
        let items = ItemCatalog::new(self.load_items()?)?;
        let npcs = NpcRoster::new(self.load_npcs()?)?;
        MarketContent::new(config, items, npcs)
            .with_context(|| format!("Invalid market in {}", self.data_dir.display()))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
