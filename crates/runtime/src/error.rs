//! Unified error type surfaced by the session API.
//!
//! Wraps engine rejections, state construction failures, and snapshot
//! encoding so clients can bubble them up with consistent context.
use barter_core::{ErrorSeverity, ExecuteError, GameError, NpcId, StateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error("failed to build the opening state")]
    InitialState(#[source] StateError),

    #[error("NPC '{npc}' is not in the market")]
    UnknownNpc { npc: NpcId },

    #[error("failed to encode state snapshot")]
    Snapshot(#[from] serde_json::Error),
}

impl SessionError {
    /// Severity of the underlying game error, if there is one.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            SessionError::Execute(error) => Some(error.severity()),
            SessionError::InitialState(error) => Some(error.severity()),
            SessionError::UnknownNpc { .. } => Some(ErrorSeverity::Validation),
            SessionError::Snapshot(_) => None,
        }
    }
}
