use std::sync::Arc;

use learn_core::model::Catalog;
use storage::CatalogProvider;

use crate::error::CatalogServiceError;

/// Loads the catalog through whichever provider the app was wired with.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogService {
    #[must_use]
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Load the catalog once and share it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the provider fails.
    pub async fn load(&self) -> Result<Arc<Catalog>, CatalogServiceError> {
        let catalog = self.provider.load_catalog().await.map_err(|err| {
            tracing::error!(error = %err, "failed to load catalog");
            err
        })?;

        tracing::info!(
            courses = catalog.courses().len(),
            achievements = catalog.achievements().len(),
            certificates = catalog.certificates().len(),
            "catalog loaded"
        );
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use storage::{FixtureCatalog, StorageError};

    struct BrokenProvider;

    #[async_trait]
    impl CatalogProvider for BrokenProvider {
        async fn load_catalog(&self) -> Result<Catalog, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[tokio::test]
    async fn loads_fixture_catalog() {
        let service = CatalogService::new(Arc::new(FixtureCatalog));
        let catalog = service.load().await.unwrap();
        assert_eq!(catalog.courses().len(), 4);
    }

    #[tokio::test]
    async fn surfaces_provider_errors() {
        let service = CatalogService::new(Arc::new(BrokenProvider));
        let err = service.load().await.unwrap_err();
        assert!(matches!(err, CatalogServiceError::Storage(StorageError::Io(_))));
    }
}
