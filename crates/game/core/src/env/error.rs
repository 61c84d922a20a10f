//! Content validation errors.
//!
//! Raised while building catalogs and rosters, or when decoding content that
//! breaks a construction-time invariant.

use crate::error::{ErrorSeverity, GameError};

use super::{ItemId, NpcId};

/// Errors in static content (item catalog, NPC roster, configuration).
///
/// Content errors mean the market cannot be set up as described; they are
/// reported before any session starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A refusal table was declared without its `default` line.
    #[error("refusal table has no `default` line")]
    MissingDefaultRefusal,

    /// Two catalog entries share an id.
    #[error("item '{item}' is defined more than once")]
    DuplicateItem { item: ItemId },

    /// Two roster entries share an id.
    #[error("NPC '{npc}' is defined more than once")]
    DuplicateNpc { npc: NpcId },

    /// Content references an item that is not in the catalog.
    #[error("{referenced_by} references unknown item '{item}'")]
    UnknownItem { item: ItemId, referenced_by: String },
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ContentError::*;
        match self {
            MissingDefaultRefusal => "CONTENT_MISSING_DEFAULT_REFUSAL",
            DuplicateItem { .. } => "CONTENT_DUPLICATE_ITEM",
            DuplicateNpc { .. } => "CONTENT_DUPLICATE_NPC",
            UnknownItem { .. } => "CONTENT_UNKNOWN_ITEM",
        }
    }
}
