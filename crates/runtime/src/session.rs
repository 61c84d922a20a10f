//! Session owner: one market, one state, one player.
//!
//! [`GameSession`] holds the loaded [`MarketContent`] together with the
//! single [`GameState`] and routes every intent through [`GameEngine`]. A
//! rejected intent leaves the state untouched and is logged at `warn`.

use barter_content::MarketContent;
use barter_core::{
    Action, ActionResult, DayReport, GameConfig, GameEngine, GameError, GameState, InstanceId,
    NpcId, NpcState, TradeOutcome,
};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};

pub struct GameSession {
    content: MarketContent,
    state: GameState,
}

impl GameSession {
    /// Opens a session on `content` at day 1.
    pub fn new(content: MarketContent) -> Result<Self> {
        let state = GameState::initial(&content.env()).map_err(SessionError::InitialState)?;
        info!(
            target: "runtime::session",
            items = content.items.len(),
            npcs = content.npcs.len(),
            "Session started"
        );
        Ok(Self { content, state })
    }

    pub fn content(&self) -> &MarketContent {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.content.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_npc(&self) -> Option<&NpcState> {
        self.state.current_npc()
    }

    pub fn npc(&self, id: &NpcId) -> Option<&NpcState> {
        self.state.npc(id)
    }

    /// The NPC's scripted clue about where to look next.
    pub fn hint(&self, id: &NpcId) -> Result<&str> {
        self.npc(id)
            .map(|npc| npc.profile.dialogue.hint.as_str())
            .ok_or_else(|| SessionError::UnknownNpc { npc: id.clone() })
    }

    pub fn trades_remaining(&self) -> u8 {
        self.state
            .trades_remaining(self.content.config.daily_trade_limit)
    }

    /// Starts talking to `npc`, or walks away with `None`.
    pub fn select_npc(&mut self, npc: Option<NpcId>) -> Result<Option<&NpcState>> {
        let ActionResult::Selected(selected) = self.execute(Action::select_npc(npc))? else {
            unreachable!("SelectNpc yields a selection result")
        };
        debug!(target: "runtime::session", npc = ?selected, "NPC selected");
        Ok(self.current_npc())
    }

    /// Offers `player_item` to the selected NPC for `npc_item`.
    ///
    /// Refusals and an exhausted quota are successful calls; inspect the
    /// returned [`TradeOutcome`].
    pub fn propose_trade(
        &mut self,
        npc_item: InstanceId,
        player_item: InstanceId,
    ) -> Result<TradeOutcome> {
        let ActionResult::Trade(outcome) =
            self.execute(Action::propose_trade(npc_item, player_item))?
        else {
            unreachable!("ProposeTrade yields a trade result")
        };

        match &outcome {
            TradeOutcome::Accepted(receipt) => info!(
                target: "runtime::session",
                npc = ?self.state.current_npc,
                gave = %receipt.player_gives,
                got = %receipt.npc_gives,
                trades_today = self.state.trades_today,
                won = receipt.won,
                "Trade accepted"
            ),
            TradeOutcome::Refused(_) => debug!(
                target: "runtime::session",
                npc = ?self.state.current_npc,
                offered = %player_item,
                "Trade refused"
            ),
            TradeOutcome::Exhausted { .. } => debug!(
                target: "runtime::session",
                trades_today = self.state.trades_today,
                "Daily trade quota exhausted"
            ),
        }
        Ok(outcome)
    }

    /// Ends the day: perishables decay and the quota resets.
    pub fn end_day(&mut self) -> Result<DayReport> {
        let ActionResult::DayStarted(report) = self.execute(Action::end_day())? else {
            unreachable!("EndDay yields a day report")
        };
        info!(
            target: "runtime::session",
            day = %report.day,
            spoiled = report.spoiled.len(),
            "Day started"
        );
        Ok(report)
    }

    /// Rebuilds the session from content.
    pub fn reset(&mut self) -> Result<()> {
        self.execute(Action::reset())?;
        info!(target: "runtime::session", "Session reset");
        Ok(())
    }

    /// Pretty JSON of the full state, for renderers and debugging.
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    fn execute(&mut self, action: Action) -> Result<ActionResult> {
        let env = self.content.env();
        match GameEngine::new(&mut self.state).execute(env, &action) {
            Ok(outcome) => Ok(outcome.action_result),
            Err(error) => {
                warn!(
                    target: "runtime::session",
                    action = action.name(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    error = %error,
                    "Action rejected"
                );
                Err(error.into())
            }
        }
    }
}
