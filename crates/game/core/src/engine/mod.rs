//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! player intent runs through pre_validate → apply → post_validate, and a
//! failure in any phase leaves the state exactly as it was.

mod errors;
mod reducer;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use reducer::StateReducer;

use crate::action::{Action, ActionResult};
use crate::env::GameEnv;
use crate::state::{GameState, GameStatus};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExecutionOutcome {
    /// Action-specific result (trade outcome, day report, ...).
    pub action_result: ActionResult,
    /// Session status after the action.
    pub status: GameStatus,
}

/// Applies actions to a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action by routing it through its transition pipeline.
    ///
    /// On error the state is rolled back to its value before the call, so a
    /// post-validation failure never leaves a half-applied transition behind.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        match transition::execute_transition(action, self.state, &env) {
            Ok(action_result) => Ok(ExecutionOutcome {
                action_result,
                status: self.state.status,
            }),
            Err(error) => {
                *self.state = before;
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::TradeError;
    use crate::env::{ItemId, NpcId};
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{Day, InstanceId};
    use crate::testing;
    use crate::trade::TradeOutcome;

    fn npc_item(state: &GameState, npc: &str, item: &str) -> InstanceId {
        state
            .npc(&NpcId::from(npc))
            .and_then(|npc| npc.inventory.first_of(&ItemId::from(item)))
            .map(|item| item.instance)
            .unwrap()
    }

    fn player_item(state: &GameState, item: &str) -> InstanceId {
        state.player.first_of(&ItemId::from(item)).unwrap().instance
    }

    #[test]
    fn trade_with_the_fisherman() {
        let market = testing::market();
        let env = market.env();
        let mut state = GameState::initial(&env).unwrap();
        let mut engine = GameEngine::new(&mut state);

        engine
            .execute(env, &Action::select_npc(Some(NpcId::from("npc1"))))
            .unwrap();
        let fish = npc_item(engine.state(), "npc1", "fish");
        let wood = player_item(engine.state(), "wood");
        let outcome = engine
            .execute(env, &Action::propose_trade(fish, wood))
            .unwrap();

        assert!(matches!(
            outcome.action_result,
            ActionResult::Trade(TradeOutcome::Accepted(_))
        ));
        assert_eq!(outcome.status, GameStatus::Playing);
        assert!(state.player.contains(fish));
        assert_eq!(state.trades_today, 1);
    }

    #[test]
    fn failed_trade_leaves_state_untouched() {
        let market = testing::market();
        let env = market.env();
        let mut state = GameState::initial(&env).unwrap();
        let before = state.clone();

        let fish = npc_item(&state, "npc1", "fish");
        let wood = player_item(&state, "wood");
        let error = GameEngine::new(&mut state)
            .execute(env, &Action::propose_trade(fish, wood))
            .unwrap_err();

        assert_eq!(
            error,
            ExecuteError::Trade(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                TradeError::NoNpcSelected
            ))
        );
        assert_eq!(error.severity(), ErrorSeverity::Recoverable);
        assert_eq!(error.error_code(), "TRADE_NO_NPC_SELECTED");
        assert_eq!(state, before);
    }

    #[test]
    fn trading_for_the_axe_wins() {
        let market = testing::market();
        let env = market.env();
        let mut state = GameState::initial(&env).unwrap();
        let skin = state.spawn_item(&env, &ItemId::from("skin")).unwrap();
        let skin_id = skin.instance;
        state.player.push(skin);

        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(env, &Action::select_npc(Some(NpcId::from("npc3"))))
            .unwrap();
        let axe = npc_item(engine.state(), "npc3", "axe");
        let outcome = engine
            .execute(env, &Action::propose_trade(axe, skin_id))
            .unwrap();
        assert_eq!(outcome.status, GameStatus::Won);

        let error = engine.execute(env, &Action::end_day()).unwrap_err();
        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert_eq!(error.error_code(), "DAY_GAME_OVER");

        let outcome = engine.execute(env, &Action::reset()).unwrap();
        assert_eq!(outcome.status, GameStatus::Playing);
        assert_eq!(state.day, Day::FIRST);
        assert_eq!(state.player, GameState::initial(&env).unwrap().player);
    }

    #[test]
    fn third_trade_of_the_day_is_exhausted() {
        let market = testing::market();
        let env = market.env();
        let mut state = GameState::initial(&env).unwrap();
        let extra = state.spawn_item(&env, &ItemId::from("wood")).unwrap();
        state.player.push(extra);

        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(env, &Action::select_npc(Some(NpcId::from("npc1"))))
            .unwrap();

        for _ in 0..2 {
            let fish = npc_item(engine.state(), "npc1", "fish");
            let wood = player_item(engine.state(), "wood");
            let outcome = engine
                .execute(env, &Action::propose_trade(fish, wood))
                .unwrap();
            assert!(matches!(
                outcome.action_result,
                ActionResult::Trade(TradeOutcome::Accepted(_))
            ));
        }

        // The fisherman now holds both woods; offer grain for one of them.
        let wood = npc_item(engine.state(), "npc1", "wood");
        let grain = player_item(engine.state(), "grain");
        let outcome = engine
            .execute(env, &Action::propose_trade(wood, grain))
            .unwrap();
        assert!(matches!(
            outcome.action_result,
            ActionResult::Trade(TradeOutcome::Exhausted { .. })
        ));

        engine.execute(env, &Action::end_day()).unwrap();
        assert_eq!(state.trades_today, 0);
        assert_eq!(state.day, Day(2));
    }
}
