use crate::action::ActionTransition;
use crate::engine::StateReducer;
use crate::env::GameEnv;
use crate::state::{GameState, History, StateError};

/// Throws the session away and rebuilds it from content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetAction;

impl ActionTransition for ResetAction {
    type Error = StateError;
    type Result = ();

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let fresh = GameState::initial(env)?;
        let history = History::seeded(env.config().reset_history.clone());
        StateReducer::new(state).replace(fresh, history);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::NpcId;
    use crate::state::{Day, GameStatus};
    use crate::testing;

    #[test]
    fn rebuilds_the_opening_state() {
        let market = testing::market();
        let env = market.env();
        let initial = GameState::initial(&env).unwrap();

        let mut state = initial.clone();
        state.day = Day(4);
        state.trades_today = 1;
        state.status = GameStatus::Won;
        state.current_npc = Some(NpcId::from("npc3"));
        state.player = Default::default();
        state.history.push("something happened");

        ResetAction.apply(&mut state, &env).unwrap();

        assert_eq!(state.day, Day::FIRST);
        assert_eq!(state.trades_today, 0);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.current_npc, None);
        assert_eq!(state.player, initial.player);
        assert_eq!(state.npcs, initial.npcs);
        assert_eq!(
            state.history.iter().collect::<Vec<_>>(),
            vec![market.config.reset_history.as_str()]
        );
    }
}
