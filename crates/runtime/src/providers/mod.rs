//! Decision provider implementations for different kinds of actors.

pub mod random;
pub mod scripted;

pub use random::RandomProvider;
pub use scripted::ScriptedProvider;
