use crate::action::{ActionTransition, DayError};
use crate::day::advance_day;
use crate::engine::StateReducer;
use crate::env::GameEnv;
use crate::narrative;
use crate::state::{Day, GameState, ItemInstance};

/// Ends the current day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndDayAction;

/// What happened at dawn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayReport {
    pub day: Day,
    /// Player items that rotted away overnight.
    pub spoiled: Vec<ItemInstance>,
}

impl ActionTransition for EndDayAction {
    type Error = DayError;
    type Result = DayReport;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.is_won() {
            return Err(DayError::GameOver);
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error> {
        let transition = advance_day(&state.player, state.day, &env.config().decay_rules());

        let mut reducer = StateReducer::new(state);
        reducer.start_day(transition.day, transition.inventory);
        reducer.narrate(
            narrative::DAY_STARTED,
            narrative::day_started_history(transition.day),
        );

        Ok(DayReport {
            day: transition.day,
            spoiled: transition.spoiled,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.trades_today != 0 {
            return Err(DayError::QuotaNotReset {
                trades: state.trades_today,
            });
        }
        if let Some(item) = state.player.iter().find(|item| item.is_spoiled()) {
            return Err(DayError::SpoiledItemRetained {
                instance: item.instance,
            });
        }
        Ok(())
    }
}
