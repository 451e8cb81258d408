//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (e.g. [`ActionError`](crate::action::ActionError),
//! [`TurnError`](crate::engine::TurnError)) are defined next to the code that
//! raises them. This module holds what they share: a severity classification
//! that tells the resolution loop whether to retry or to give up.
//!
//! # Design Principles
//!
//! - **Type Safety**: each domain has its own error enum
//! - **Severity Classification**: recoverable errors turn into a retry plus a
//!   notice on the interaction surface; everything else propagates
//! - **No process exits**: the worst outcome of any error is a terminal phase

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the actor picks again (cancelled selection, no targets,
///   not enough MP)
/// - **Validation**: a rule set asked for something that does not exist
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: the match cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - re-offer the menu.
    ///
    /// Examples: selection cancelled, no eligible targets
    Recoverable,

    /// Validation error - caller misuse, do not retry.
    ///
    /// Examples: unknown action name, stale character handle
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the match cannot continue.
    ///
    /// Examples: nobody left who could act
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

/// Common trait for all arena-core errors.
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
    /// Useful for log filtering and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_recoverable_is_recoverable() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}
