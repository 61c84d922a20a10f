//! Action execution errors.
//!
//! Only conditions that the presentation layer should have prevented are
//! errors. A refused trade or an exhausted quota is a normal
//! [`crate::trade::TradeOutcome`].

use std::fmt;

use crate::env::NpcId;
use crate::error::{ErrorSeverity, GameError};
use crate::state::InstanceId;

/// Party holding an inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Holder {
    Player,
    Npc(NpcId),
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Holder::Player => f.write_str("player"),
            Holder::Npc(npc) => write!(f, "NPC '{npc}'"),
        }
    }
}

// ============================================================================
// Select
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("NPC '{npc}' is not in the market")]
    NpcNotFound { npc: NpcId },
}

impl GameError for SelectError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SelectError::NpcNotFound { .. } => "SELECT_NPC_NOT_FOUND",
        }
    }
}

// ============================================================================
// Trade
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TradeError {
    /// The goal has been reached; only a reset resumes play.
    #[error("the game is already won")]
    GameOver,

    #[error("no NPC is selected")]
    NoNpcSelected,

    #[error("NPC '{npc}' is not in the market")]
    NpcNotFound { npc: NpcId },

    #[error("item {instance} is not held by the {holder}")]
    ItemNotHeld { holder: Holder, instance: InstanceId },

    #[error("{trades} trades recorded today, above the limit of {limit}")]
    QuotaOverflow { trades: u8, limit: u8 },

    #[error("item {instance} is held more than once after the exchange")]
    DuplicateInstance { instance: InstanceId },
}

impl GameError for TradeError {
    fn severity(&self) -> ErrorSeverity {
        use TradeError::*;
        match self {
            GameOver | NoNpcSelected => ErrorSeverity::Recoverable,
            NpcNotFound { .. } | ItemNotHeld { .. } => ErrorSeverity::Validation,
            QuotaOverflow { .. } | DuplicateInstance { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use TradeError::*;
        match self {
            GameOver => "TRADE_GAME_OVER",
            NoNpcSelected => "TRADE_NO_NPC_SELECTED",
            NpcNotFound { .. } => "TRADE_NPC_NOT_FOUND",
            ItemNotHeld { .. } => "TRADE_ITEM_NOT_HELD",
            QuotaOverflow { .. } => "TRADE_QUOTA_OVERFLOW",
            DuplicateInstance { .. } => "TRADE_DUPLICATE_INSTANCE",
        }
    }
}

// ============================================================================
// Day
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DayError {
    /// Days no longer advance once the goal has been reached.
    #[error("the game is already won")]
    GameOver,

    #[error("trade quota not reset at day start ({trades} recorded)")]
    QuotaNotReset { trades: u8 },

    #[error("spoiled item {instance} left in the player's inventory")]
    SpoiledItemRetained { instance: InstanceId },
}

impl GameError for DayError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DayError::GameOver => ErrorSeverity::Recoverable,
            DayError::QuotaNotReset { .. } | DayError::SpoiledItemRetained { .. } => {
                ErrorSeverity::Internal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DayError::GameOver => "DAY_GAME_OVER",
            DayError::QuotaNotReset { .. } => "DAY_QUOTA_NOT_RESET",
            DayError::SpoiledItemRetained { .. } => "DAY_SPOILED_ITEM_RETAINED",
        }
    }
}
