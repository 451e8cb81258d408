//! Rule sets and content for arena matches.
//!
//! This crate houses everything the engine treats as external content:
//! - Rule sets (`SimpleRules`, `ArenaRules`) implementing the core factory
//! - Name tables for generated characters
//! - Content catalogs: equipment slots, starting gear, potions (RON)
//! - Match configuration (TOML)
//!
//! Content only shapes freshly generated characters and never appears in the
//! engine's own types.

pub mod catalog;
pub mod names;
pub mod rules;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::Catalog;
pub use names::NameTable;
pub use rules::{ArenaRules, SimpleRules};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader};
