//! In-memory LogbookRepository implementation for tests and local runs.

use std::sync::RwLock;

use arena_core::Value;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as Json;

use super::{Logbook, LogbookRepository, RepositoryError, Result};

/// Holds the last saved logbook as a JSON document, so loads go through the
/// same codec as the file repository.
#[derive(Default)]
pub struct InMemoryLogbookRepository {
    document: RwLock<Option<Json>>,
}

impl InMemoryLogbookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw document last saved, if any.
    pub fn document(&self) -> Result<Option<Json>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.clone())
    }
}

impl<N> LogbookRepository<N> for InMemoryLogbookRepository
where
    N: Value + Serialize + DeserializeOwned,
{
    fn save(&self, logbook: &Logbook<N>) -> Result<()> {
        let json = logbook.to_json()?;
        let mut document = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *document = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<Logbook<N>>> {
        self.document()?.map(Logbook::from_json).transpose()
    }
}
