//! Public API surface for runtime consumers.
//!
//! Re-exports the error and provider types so clients depend on a single
//! module.
mod errors;
mod providers;

pub use errors::{ProviderKind, Result, RuntimeError};
pub use providers::{DecisionProvider, FirstChoiceProvider};
