//! State management errors.
//!
//! Errors raised while building a session state from content.

use crate::env::{ItemId, NpcId};
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur while constructing game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Content references an item that the catalog does not define.
    #[error("item '{item}' is not in the catalog")]
    UnknownItem { item: ItemId },

    /// Roster lists the same NPC twice.
    #[error("NPC '{npc}' is spawned more than once")]
    DuplicateNpc { npc: NpcId },

    /// Instance id allocation overflow (all ids exhausted).
    #[error("instance id overflow (current: {current})")]
    InstanceIdOverflow { current: u64 },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            UnknownItem { .. } => "STATE_UNKNOWN_ITEM",
            DuplicateNpc { .. } => "STATE_DUPLICATE_NPC",
            InstanceIdOverflow { .. } => "STATE_INSTANCE_ID_OVERFLOW",
        }
    }
}
