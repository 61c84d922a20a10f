//! Game configuration constants and tunable parameters.

use crate::env::ItemId;

/// Game configuration loaded from `config.toml` (or [`GameConfig::default`]).
///
/// Every field has a default, so a partial TOML file only overrides the
/// values it names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Maximum number of successful trades per in-game day.
    pub daily_trade_limit: u8,
    /// Freshness lost by every perishable item at each day transition.
    pub decay_per_day: u8,
    /// Catalog id of the item that wins the game when received from an NPC.
    pub goal_item: ItemId,
    /// Catalog ids the player starts with, in inventory order.
    pub starting_items: Vec<ItemId>,
    /// Message shown at game start and after a reset.
    pub welcome_message: String,
    /// First history line of a new game.
    pub opening_history: String,
    /// Sole history line after a reset.
    pub reset_history: String,
}

impl GameConfig {
    pub const DEFAULT_DAILY_TRADE_LIMIT: u8 = 2;
    pub const DEFAULT_DECAY_PER_DAY: u8 = 25;
    pub const DEFAULT_GOAL_ITEM: &'static str = "axe";
    pub const DEFAULT_STARTING_ITEMS: [&'static str; 2] = ["grain", "wood"];

    pub fn new() -> Self {
        Self {
            daily_trade_limit: Self::DEFAULT_DAILY_TRADE_LIMIT,
            decay_per_day: Self::DEFAULT_DECAY_PER_DAY,
            goal_item: ItemId::from(Self::DEFAULT_GOAL_ITEM),
            starting_items: Self::DEFAULT_STARTING_ITEMS
                .iter()
                .map(|id| ItemId::from(*id))
                .collect(),
            welcome_message: "欢迎来到原始集市。你的目标是换到一把『石斧』来修理房屋。".into(),
            opening_history: "游戏开始：你带着一些谷物和木材来到了集市。".into(),
            reset_history: "游戏重新开始。".into(),
        }
    }

    /// Parameters consumed by [`crate::trade::resolve_trade`].
    pub fn trade_rules(&self) -> TradeRules<'_> {
        TradeRules {
            daily_trade_limit: self.daily_trade_limit,
            goal_item: &self.goal_item,
        }
    }

    /// Parameters consumed by [`crate::day::advance_day`].
    pub fn decay_rules(&self) -> DecayRules {
        DecayRules {
            decay_per_day: self.decay_per_day,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Trade resolver parameters borrowed from [`GameConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeRules<'a> {
    pub daily_trade_limit: u8,
    pub goal_item: &'a ItemId,
}

/// Day cycle parameters copied from [`GameConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecayRules {
    pub decay_per_day: u8,
}

impl Default for DecayRules {
    fn default() -> Self {
        Self {
            decay_per_day: GameConfig::DEFAULT_DECAY_PER_DAY,
        }
    }
}
