//! Content catalog loader.

use std::path::Path;

use crate::catalog::Catalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for name tables, slots and starting gear from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a RON file. Omitted sections fall back to the
    /// built-in catalog.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Ok(catalog)
    }
}
