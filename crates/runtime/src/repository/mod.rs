//! Logbook persistence.
//!
//! A [`LogbookRepository`] saves and loads the whole [`Logbook`] of a match.
//! Two backends ship with the runtime:
//! - [`FileLogbookRepository`]: one pretty-printed JSON file
//! - [`InMemoryLogbookRepository`]: tests and throwaway runs

mod error;
mod file;
mod logbook;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileLogbookRepository;
pub use logbook::{LogEntry, Logbook};
pub use memory::InMemoryLogbookRepository;

use arena_core::Value;

/// Storage for a match logbook.
pub trait LogbookRepository<N: Value = i64>: Send + Sync {
    /// Replaces whatever was stored before.
    fn save(&self, logbook: &Logbook<N>) -> Result<()>;

    /// `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<Logbook<N>>>;
}
