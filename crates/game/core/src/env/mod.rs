//! Traits describing read-only market data.
//!
//! Oracles expose item definitions and NPC templates. The [`GameEnv`]
//! aggregate bundles them with the [`GameConfig`] so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod error;
mod items;
mod npc;

pub use error::ContentError;
pub use items::{ItemCatalog, ItemCategory, ItemDefinition, ItemId, ItemOracle};
pub use npc::{
    Dialogue, NpcId, NpcOracle, NpcRoster, NpcTemplate, RefusalTable, Want, WantRule,
};

use crate::config::GameConfig;

/// Aggregates read-only oracles required by the action pipeline.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    items: &'a dyn ItemOracle,
    npcs: &'a dyn NpcOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(items: &'a dyn ItemOracle, npcs: &'a dyn NpcOracle, config: &'a GameConfig) -> Self {
        Self {
            items,
            npcs,
            config,
        }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn npcs(&self) -> &'a dyn NpcOracle {
        self.npcs
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Checks that every item the configuration and roster mention exists.
    pub fn validate(&self) -> Result<(), ContentError> {
        let require = |item: &ItemId, referenced_by: String| {
            if self.items.definition(item).is_some() {
                Ok(())
            } else {
                Err(ContentError::UnknownItem {
                    item: item.clone(),
                    referenced_by,
                })
            }
        };

        require(&self.config.goal_item, "config.goal_item".into())?;
        for item in &self.config.starting_items {
            require(item, "config.starting_items".into())?;
        }
        for npc in self.npcs.roster() {
            for item in &npc.inventory {
                require(item, format!("NPC '{}' inventory", npc.id))?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("items", &self.items.all_definitions().len())
            .field("npcs", &self.npcs.roster().len())
            .field("config", self.config)
            .finish()
    }
}
