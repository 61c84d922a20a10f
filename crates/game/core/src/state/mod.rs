//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the session: day and
//! quota bookkeeping, the narrative log, and the inventories of the player
//! and every NPC. Frontends clone or query this state but mutate it
//! exclusively through the engine.
mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    Day, Freshness, GameStatus, History, InstanceId, Inventory, ItemError, ItemInstance, NpcState,
};

use crate::env::{GameEnv, ItemId, NpcId};

/// Canonical snapshot of the session.
///
/// Serializes (with the `serde` feature) to the read-only JSON snapshot that
/// presentation layers render from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub day: Day,
    /// Successful trades since the current day started.
    pub trades_today: u8,
    /// NPC the player is currently talking to.
    pub current_npc: Option<NpcId>,
    /// Most recent narrative line.
    pub message: String,
    pub history: History,
    pub status: GameStatus,
    pub player: Inventory,
    /// Spawned NPCs in roster order.
    pub npcs: Vec<NpcState>,

    /// Sequential instance id allocator (monotonically increasing, never reused).
    #[cfg_attr(feature = "serde", serde(skip))]
    next_instance_id: u64,
}

impl GameState {
    /// Builds the opening state: starting items for the player, every roster
    /// NPC with freshly spawned goods, day 1, empty quota.
    ///
    /// Instance ids are allocated in a fixed order (player first, then NPCs in
    /// roster order), so two initial states built from the same env are equal.
    pub fn initial(env: &GameEnv<'_>) -> Result<Self, StateError> {
        let config = env.config();
        let mut state = Self {
            day: Day::FIRST,
            trades_today: 0,
            current_npc: None,
            message: config.welcome_message.clone(),
            history: History::seeded(config.opening_history.clone()),
            status: GameStatus::Playing,
            player: Inventory::new(),
            npcs: Vec::new(),
            next_instance_id: 1,
        };

        for item in &config.starting_items {
            let instance = state.spawn_item(env, item)?;
            state.player.push(instance);
        }

        for template in env.npcs().roster() {
            if state.npc(&template.id).is_some() {
                return Err(StateError::DuplicateNpc {
                    npc: template.id.clone(),
                });
            }
            let mut inventory = Inventory::new();
            for item in &template.inventory {
                inventory.push(state.spawn_item(env, item)?);
            }
            state.npcs.push(NpcState::new(template.clone(), inventory));
        }

        Ok(state)
    }

    /// Creates a fresh instance of a catalog item with a new instance id.
    pub fn spawn_item(
        &mut self,
        env: &GameEnv<'_>,
        item: &ItemId,
    ) -> Result<ItemInstance, StateError> {
        let definition = env
            .items()
            .definition(item)
            .ok_or_else(|| StateError::UnknownItem { item: item.clone() })?;
        let instance = self.allocate_instance_id()?;
        Ok(definition.instantiate(instance))
    }

    /// Allocates a new unique [`InstanceId`].
    pub fn allocate_instance_id(&mut self) -> Result<InstanceId, StateError> {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id =
            self.next_instance_id
                .checked_add(1)
                .ok_or(StateError::InstanceIdOverflow {
                    current: self.next_instance_id,
                })?;
        Ok(id)
    }

    pub fn npc(&self, id: &NpcId) -> Option<&NpcState> {
        self.npcs.iter().find(|npc| npc.id() == id)
    }

    pub fn npc_mut(&mut self, id: &NpcId) -> Option<&mut NpcState> {
        self.npcs.iter_mut().find(|npc| npc.id() == id)
    }

    /// The NPC currently selected for interaction, if any.
    pub fn current_npc(&self) -> Option<&NpcState> {
        self.current_npc.as_ref().and_then(|id| self.npc(id))
    }

    /// Trades still available today under the given limit.
    pub fn trades_remaining(&self, daily_trade_limit: u8) -> u8 {
        daily_trade_limit.saturating_sub(self.trades_today)
    }

    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }
}
