use crate::action::{ActionTransition, SelectError};
use crate::engine::StateReducer;
use crate::env::{GameEnv, NpcId};
use crate::state::GameState;

/// Starts talking to an NPC, or walks away with `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectNpcAction {
    pub npc: Option<NpcId>,
}

impl SelectNpcAction {
    pub fn new(npc: Option<NpcId>) -> Self {
        Self { npc }
    }
}

impl ActionTransition for SelectNpcAction {
    type Error = SelectError;
    type Result = Option<NpcId>;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match &self.npc {
            Some(npc) if state.npc(npc).is_none() => {
                Err(SelectError::NpcNotFound { npc: npc.clone() })
            }
            _ => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        StateReducer::new(state).select(self.npc.clone());
        Ok(self.npc.clone())
    }
}
