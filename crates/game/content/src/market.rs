//! A complete, validated market: catalog, roster and rules.

use anyhow::Context;
use barter_core::{GameConfig, GameEnv, ItemCatalog, NpcRoster};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, NpcLoader};

const BUILTIN_CONFIG: &str = include_str!("../data/config.toml");
const BUILTIN_ITEMS: &str = include_str!("../data/items.ron");
const BUILTIN_NPCS: &str = include_str!("../data/npcs.ron");

/// Owned content behind a [`GameEnv`].
#[derive(Clone, Debug)]
pub struct MarketContent {
    pub config: GameConfig,
    pub items: ItemCatalog,
    pub npcs: NpcRoster,
}

impl MarketContent {
    /// Assembles content and checks every cross-reference.
    pub fn new(config: GameConfig, items: ItemCatalog, npcs: NpcRoster) -> LoadResult<Self> {
        let content = Self {
            config,
            items,
            npcs,
        };
        content
            .env()
            .validate()
            .context("Market content failed validation")?;
        Ok(content)
    }

    /// The market shipped with the crate: five NPCs, ten items.
    pub fn builtin() -> LoadResult<Self> {
        Self::parse(BUILTIN_CONFIG, BUILTIN_ITEMS, BUILTIN_NPCS).context("Built-in market")
    }

    /// Builds a market from the text of `config.toml`, `items.ron` and `npcs.ron`.
    pub fn parse(config: &str, items: &str, npcs: &str) -> LoadResult<Self> {
        let config = ConfigLoader::parse(config)?;
        let items = ItemCatalog::new(ItemLoader::parse(items)?)?;
        let npcs = NpcRoster::new(NpcLoader::parse(npcs)?)?;
        Self::new(config, items, npcs)
    }

    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.items, &self.npcs, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use barter_core::{ContentError, ItemId, ItemOracle, NpcOracle};

    use super::*;

    #[test]
    fn builtin_market_loads() {
        let market = MarketContent::builtin().unwrap();

        assert_eq!(market.items.len(), 10);
        assert_eq!(market.npcs.len(), 5);
        assert_eq!(market.config, GameConfig::default());
        assert!(market.items.definition(&ItemId::from("axe")).is_some());
        assert_eq!(market.npcs.roster()[0].name, "老渔夫");
    }

    #[test]
    fn unknown_starting_item_is_rejected() {
        let error = MarketContent::parse(
            "starting_items = [\"gold\"]\n",
            BUILTIN_ITEMS,
            BUILTIN_NPCS,
        )
        .unwrap_err();

        let content_error = error.downcast_ref::<ContentError>().unwrap();
        assert!(matches!(content_error, ContentError::UnknownItem { item, .. } if item.as_str() == "gold"));
    }
}
