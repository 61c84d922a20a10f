use crate::env::{NpcId, NpcTemplate};

use super::Inventory;

/// A spawned NPC: its static profile plus the inventory that trades mutate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NpcState {
    pub profile: NpcTemplate,
    /// Live goods. `profile.inventory` keeps the starting list for resets.
    pub inventory: Inventory,
}

impl NpcState {
    pub fn new(profile: NpcTemplate, inventory: Inventory) -> Self {
        Self { profile, inventory }
    }

    pub fn id(&self) -> &NpcId {
        &self.profile.id
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}
