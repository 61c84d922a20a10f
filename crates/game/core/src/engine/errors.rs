//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, EndDayAction, ProposeTradeAction, ResetAction, SelectNpcAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("select action failed: {0}")]
    Select(TransitionPhaseError<<SelectNpcAction as ActionTransition>::Error>),

    #[error("trade action failed: {0}")]
    Trade(TransitionPhaseError<<ProposeTradeAction as ActionTransition>::Error>),

    #[error("end day action failed: {0}")]
    EndDay(TransitionPhaseError<<EndDayAction as ActionTransition>::Error>),

    #[error("reset action failed: {0}")]
    Reset(TransitionPhaseError<<ResetAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline stage that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::Select(err) => err.phase,
            ExecuteError::Trade(err) => err.phase,
            ExecuteError::EndDay(err) => err.phase,
            ExecuteError::Reset(err) => err.phase,
        }
    }

    fn inner(&self) -> &dyn GameError {
        match self {
            ExecuteError::Select(err) => &err.error,
            ExecuteError::Trade(err) => &err.error,
            ExecuteError::EndDay(err) => &err.error,
            ExecuteError::Reset(err) => &err.error,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.inner().severity()
    }

    fn error_code(&self) -> &'static str {
        self.inner().error_code()
    }
}
