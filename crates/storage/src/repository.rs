use async_trait::async_trait;
use learn_core::model::{Catalog, CatalogError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::fixtures::FixtureCatalog;
use crate::json::JsonFileCatalog;

/// Errors surfaced by catalog providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] learn_core::error::Error),
}

impl From<CatalogError> for StorageError {
    fn from(err: CatalogError) -> Self {
        Self::Invalid(err.into())
    }
}

/// Source of the catalog the screens render.
///
/// Screens never see where the data came from; swapping a provider is the
/// only change needed to move from sample data to a real source.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Load the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or holds an invalid catalog.
    async fn load_catalog(&self) -> Result<Catalog, StorageError>;
}

/// Provider serving an already-built catalog. Useful for tests and previews.
#[derive(Clone)]
pub struct InMemoryCatalog {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        Ok(Catalog::clone(&self.catalog))
    }
}

/// Holds the selected provider behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogProvider>,
}

impl Storage {
    /// Built-in sample data.
    #[must_use]
    pub fn fixtures() -> Self {
        Self {
            catalog: Arc::new(FixtureCatalog),
        }
    }

    /// Catalog read from a JSON document on disk.
    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Arc::new(JsonFileCatalog::new(path)),
        }
    }

    #[must_use]
    pub fn in_memory(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::new(catalog)),
        }
    }
}
