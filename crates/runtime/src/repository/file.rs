//! File-based LogbookRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use arena_core::Value;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Logbook, LogbookRepository, RepositoryError, Result};

/// Keeps the logbook as one pretty-printed JSON document.
pub struct FileLogbookRepository {
    path: PathBuf,
}

impl FileLogbookRepository {
    /// Repository writing to `path`; parent directories are created.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        Ok(Self { path })
    }

    /// `logbook.json` inside `base_dir`.
    pub fn in_dir(base_dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(base_dir.as_ref().join("logbook.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<N> LogbookRepository<N> for FileLogbookRepository
where
    N: Value + Serialize + DeserializeOwned,
{
    fn save(&self, logbook: &Logbook<N>) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let text = serde_json::to_string_pretty(&logbook.to_json()?)?;

        fs::write(&temp_path, text).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            "Saved logbook ({} entries) to {}",
            logbook.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Logbook<N>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let logbook = Logbook::from_json(serde_json::from_str(&text)?)?;

        tracing::debug!(
            "Loaded logbook ({} entries) from {}",
            logbook.len(),
            self.path.display()
        );
        Ok(Some(logbook))
    }
}
