//! Error types for the match engine.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};

/// Errors that can occur while picking the next actor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("no characters are able to act")]
    NoAbleCharacters,
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        "TURN_NO_ABLE_CHARACTERS"
    }
}

/// Errors surfaced by a menu or combat step.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::Action(error) => error.severity(),
            EngineError::Turn(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::Action(error) => error.error_code(),
            EngineError::Turn(error) => error.error_code(),
        }
    }
}
