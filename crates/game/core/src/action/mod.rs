//! Player intents and their state transitions.
//!
//! Every intent the presentation layer can express is an [`Action`] variant
//! backed by a type implementing [`ActionTransition`]:
//!
//! - `select`: choose (or leave) the NPC being talked to
//! - `trade`: propose a swap with the selected NPC
//! - `day`: end the day, decaying perishables and resetting the quota
//! - `reset`: rebuild the session from content
//!
//! Transitions are driven by [`crate::engine::GameEngine`].

mod day;
pub mod error;
mod reset;
mod select;
mod trade;

pub use day::{DayReport, EndDayAction};
pub use error::{DayError, Holder, SelectError, TradeError};
pub use reset::ResetAction;
pub use select::SelectNpcAction;
pub use trade::ProposeTradeAction;

use crate::env::{GameEnv, NpcId};
use crate::state::{GameState, InstanceId};
use crate::trade::TradeOutcome;

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level user intent.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    SelectNpc(SelectNpcAction),
    ProposeTrade(ProposeTradeAction),
    EndDay(EndDayAction),
    Reset(ResetAction),
}

impl Action {
    pub fn select_npc(npc: Option<NpcId>) -> Self {
        Self::SelectNpc(SelectNpcAction::new(npc))
    }

    pub fn propose_trade(npc_item: InstanceId, player_item: InstanceId) -> Self {
        Self::ProposeTrade(ProposeTradeAction::new(npc_item, player_item))
    }

    pub fn end_day() -> Self {
        Self::EndDay(EndDayAction)
    }

    pub fn reset() -> Self {
        Self::Reset(ResetAction)
    }

    /// Stable snake_case name, used as a log field.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Action-specific execution result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ActionResult {
    Selected(Option<NpcId>),
    Trade(TradeOutcome),
    DayStarted(DayReport),
    Reset,
}
