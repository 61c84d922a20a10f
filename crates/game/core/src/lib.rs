//! Deterministic barter rules shared by every frontend.
//!
//! `barter-core` defines the canonical rules (items, NPC wants, trade
//! resolution, the day cycle) and exposes pure APIs that both the runtime and
//! offline tools reuse. All state mutation flows through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod config;
pub mod day;
pub mod engine;
pub mod env;
pub mod error;
pub mod narrative;
pub mod state;
pub mod trade;

#[cfg(test)]
mod testing;

pub use action::{
    Action, ActionResult, ActionTransition, DayError, DayReport, EndDayAction, Holder,
    ProposeTradeAction, ResetAction, SelectError, SelectNpcAction, TradeError,
};
pub use config::{DecayRules, GameConfig, TradeRules};
pub use day::{DayTransition, advance_day};
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, StateReducer, TransitionPhase,
    TransitionPhaseError,
};
pub use env::{
    ContentError, Dialogue, GameEnv, ItemCatalog, ItemCategory, ItemDefinition, ItemId,
    ItemOracle, NpcId, NpcOracle, NpcRoster, NpcTemplate, RefusalTable, Want, WantRule,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Day, Freshness, GameState, GameStatus, History, InstanceId, Inventory, ItemError,
    ItemInstance, NpcState, StateError,
};
pub use trade::{TradeOutcome, TradeReceipt, TradeRefusal, resolve_trade};
