//! Runtime for headless arena matches.
//!
//! This crate wires the decision provider abstraction, the interaction
//! surface and logbook persistence into a runtime API. Consumers build a
//! [`Runtime`] from a rule set and two providers, then call
//! [`Runtime::run`] or drive it step by step.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the flow loop, the builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`session`] answers the engine on behalf of the providers
//! - [`providers`] ships random and scripted decision makers
//! - [`repository`] stores the match logbook
pub mod api;
pub mod providers;
pub mod repository;
pub mod runtime;
pub mod session;

pub use api::{DecisionProvider, FirstChoiceProvider, ProviderKind, Result, RuntimeError};
pub use providers::{RandomProvider, ScriptedProvider};
pub use repository::{
    FileLogbookRepository, InMemoryLogbookRepository, LogEntry, Logbook, LogbookRepository,
    RepositoryError,
};
pub use runtime::{FlowOutcome, Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::Session;
