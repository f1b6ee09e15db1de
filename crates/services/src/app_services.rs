use std::sync::Arc;

use storage::Storage;

use crate::analytics::{Analytics, events};
use crate::catalog_service::CatalogService;
use crate::Clock;

/// Assembles the app-facing services from a storage backend and an analytics handle.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    catalog: Arc<CatalogService>,
    analytics: Analytics,
}

impl AppServices {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage, analytics: Analytics) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));
        Self {
            clock,
            catalog,
            analytics,
        }
    }

    /// Emit `app_opened` for this launch.
    pub fn announce_launch(&self, device: &str) {
        self.analytics
            .log(&events::app_opened(self.clock.now(), device));
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn analytics(&self) -> Analytics {
        self.analytics.clone()
    }
}

/// Short platform label used as the `device` parameter of `app_opened`.
#[must_use]
pub fn device_label() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}
