//! Action resolution errors.
//!
//! Errors raised while looking up, targeting, paying for and invoking bound
//! actions, plus equipment errors raised by characters.

use crate::error::{ErrorSeverity, GameError};
use crate::state::CharacterId;

// ============================================================================
// Action Errors
// ============================================================================

/// Errors that can occur while resolving a character action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The name is not bound on the character.
    #[error("unknown action `{action}`")]
    UnknownAction { action: String },

    /// A cost attribute is below the required amount.
    #[error("not enough {attribute} for {action} ({available}/{required})")]
    InsufficientResource {
        action: String,
        attribute: String,
        required: String,
        available: String,
    },

    /// Scope and filter left nobody to target.
    #[error("no eligible targets for {action}")]
    NoEligibleTargets { action: String },

    /// The interaction surface declined to pick a target.
    #[error("selection cancelled")]
    SelectionCancelled,

    /// A handle does not point at a character in the roster.
    #[error("no character at {0}")]
    UnknownCharacter(CharacterId),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            InsufficientResource { .. } | NoEligibleTargets { .. } | SelectionCancelled => {
                ErrorSeverity::Recoverable
            }
            UnknownAction { .. } | UnknownCharacter(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            UnknownAction { .. } => "ACTION_UNKNOWN",
            InsufficientResource { .. } => "ACTION_INSUFFICIENT_RESOURCE",
            NoEligibleTargets { .. } => "ACTION_NO_ELIGIBLE_TARGETS",
            SelectionCancelled => "ACTION_SELECTION_CANCELLED",
            UnknownCharacter(_) => "ACTION_UNKNOWN_CHARACTER",
        }
    }
}

impl ActionError {
    pub(crate) fn unknown(action: &str) -> Self {
        ActionError::UnknownAction {
            action: action.to_owned(),
        }
    }
}

// ============================================================================
// Equipment Errors
// ============================================================================

/// Errors that can occur when equipping an item.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// The character has no slot of that kind.
    #[error("no `{slot}` slot")]
    UnknownSlot { slot: String },

    /// Every slot of that kind is taken.
    #[error("`{slot}` slots are full ({capacity})")]
    SlotFull { slot: String, capacity: usize },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EquipError::UnknownSlot { .. } => ErrorSeverity::Validation,
            EquipError::SlotFull { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EquipError::UnknownSlot { .. } => "EQUIP_UNKNOWN_SLOT",
            EquipError::SlotFull { .. } => "EQUIP_SLOT_FULL",
        }
    }
}
