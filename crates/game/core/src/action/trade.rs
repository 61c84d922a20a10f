use std::collections::BTreeSet;

use crate::action::{ActionTransition, Holder, TradeError};
use crate::engine::StateReducer;
use crate::env::{GameEnv, NpcId};
use crate::state::{GameState, InstanceId, NpcState};
use crate::trade::{TradeOutcome, resolve_trade};

/// Offers `player_item` to the selected NPC in exchange for `npc_item`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProposeTradeAction {
    pub npc_item: InstanceId,
    pub player_item: InstanceId,
}

impl ProposeTradeAction {
    pub fn new(npc_item: InstanceId, player_item: InstanceId) -> Self {
        Self {
            npc_item,
            player_item,
        }
    }

    fn counterpart<'s>(&self, state: &'s GameState) -> Result<&'s NpcState, TradeError> {
        let npc_id = state.current_npc.as_ref().ok_or(TradeError::NoNpcSelected)?;
        state.npc(npc_id).ok_or_else(|| TradeError::NpcNotFound {
            npc: npc_id.clone(),
        })
    }
}

impl ActionTransition for ProposeTradeAction {
    type Error = TradeError;
    type Result = TradeOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_won() {
            return Err(TradeError::GameOver);
        }

        let npc = self.counterpart(state)?;
        if !state.player.contains(self.player_item) {
            return Err(TradeError::ItemNotHeld {
                holder: Holder::Player,
                instance: self.player_item,
            });
        }
        if !npc.inventory.contains(self.npc_item) {
            return Err(TradeError::ItemNotHeld {
                holder: Holder::Npc(npc.id().clone()),
                instance: self.npc_item,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let npc = self.counterpart(state)?;
        let npc_id: NpcId = npc.id().clone();
        let npc_item = npc
            .inventory
            .get(self.npc_item)
            .ok_or_else(|| TradeError::ItemNotHeld {
                holder: Holder::Npc(npc_id.clone()),
                instance: self.npc_item,
            })?;
        let player_item = state
            .player
            .get(self.player_item)
            .ok_or(TradeError::ItemNotHeld {
                holder: Holder::Player,
                instance: self.player_item,
            })?;

        let outcome = resolve_trade(
            &npc.profile,
            npc_item,
            player_item,
            state.trades_today,
            &env.config().trade_rules(),
        );

        let mut reducer = StateReducer::new(state);
        match &outcome {
            TradeOutcome::Exhausted { message } => reducer.set_message(message.clone()),
            TradeOutcome::Accepted(receipt) => {
                if !reducer.exchange(&npc_id, receipt.player_gives, receipt.npc_gives) {
                    return Err(TradeError::ItemNotHeld {
                        holder: Holder::Player,
                        instance: receipt.player_gives,
                    });
                }
                reducer.count_trade();
                reducer.narrate(receipt.message.clone(), receipt.history.clone());
                if receipt.won {
                    reducer.mark_won();
                }
            }
            TradeOutcome::Refused(refusal) => {
                reducer.narrate(refusal.message.clone(), refusal.history.clone())
            }
        }

        Ok(outcome)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let limit = env.config().daily_trade_limit;
        if state.trades_today > limit {
            return Err(TradeError::QuotaOverflow {
                trades: state.trades_today,
                limit,
            });
        }

        let mut seen = BTreeSet::new();
        let held = state
            .player
            .iter()
            .chain(state.npcs.iter().flat_map(|npc| npc.inventory.iter()));
        for item in held {
            if !seen.insert(item.instance) {
                return Err(TradeError::DuplicateInstance {
                    instance: item.instance,
                });
            }
        }
        Ok(())
    }
}
