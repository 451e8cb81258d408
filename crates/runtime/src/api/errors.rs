//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, repositories and missing wiring so
//! clients can bubble them up with consistent context.
use std::fmt;

use arena_core::{EngineError, ErrorSeverity, GameError};
use thiserror::Error;

use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{kind} decision provider not set")]
    ProviderNotSet { kind: ProviderKind },

    #[error("runtime requires a rule set before building")]
    MissingRules,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("match still running after {turns} turns")]
    TurnLimitReached { turns: usize },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Engine(error) => error.severity(),
            RuntimeError::TurnLimitReached { .. } => ErrorSeverity::Recoverable,
            RuntimeError::ProviderNotSet { .. } | RuntimeError::MissingRules => {
                ErrorSeverity::Validation
            }
            RuntimeError::Repository(_) => ErrorSeverity::Fatal,
        }
    }
}

/// Which side of the match a provider decides for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    Player,
    Npc,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProviderKind::Player => "player",
            ProviderKind::Npc => "npc",
        };
        write!(f, "{}", label)
    }
}
