//! Common error infrastructure for barter-core.
//!
//! This module provides shared types and traits used across all error types in barter-core.
//! Domain-specific errors (e.g., `TradeError`, `DayError`) are defined in their
//! respective modules alongside the actions they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each action has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Informational outcomes are not errors**: a refused trade or an exhausted
//!   daily quota is reported through [`crate::trade::TradeOutcome`]

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: The player can fix the situation with another action
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors indicating broken content or state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry after a corrective action.
    ///
    /// Examples: no NPC selected, game already won (reset first)
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown NPC, item not held by the named party
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: quota counter above the limit, spoiled item left in inventory
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - content or state cannot be used.
    ///
    /// Examples: roster references an item missing from the catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all barter-core errors.
///
/// This trait provides a uniform interface for error classification across
/// all error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, log fields, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
