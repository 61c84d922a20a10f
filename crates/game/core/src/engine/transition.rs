//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::SelectNpc(transition) => {
            let npc = drive_transition(transition, state, env).map_err(ExecuteError::Select)?;
            Ok(ActionResult::Selected(npc))
        }
        Action::ProposeTrade(transition) => {
            let outcome = drive_transition(transition, state, env).map_err(ExecuteError::Trade)?;
            Ok(ActionResult::Trade(outcome))
        }
        Action::EndDay(transition) => {
            let report = drive_transition(transition, state, env).map_err(ExecuteError::EndDay)?;
            Ok(ActionResult::DayStarted(report))
        }
        Action::Reset(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Reset)?;
            Ok(ActionResult::Reset)
        }
    }
}
