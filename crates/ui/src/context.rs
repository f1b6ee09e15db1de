use std::sync::Arc;

use services::{Analytics, CatalogService};

use crate::routes::Route;

pub trait UiApp: Send + Sync {
    fn catalog_service(&self) -> Arc<CatalogService>;
    fn analytics(&self) -> Analytics;
    /// Route the back stack opens on. `Home` unless a deep link was given.
    fn start_route(&self) -> Route;
}

#[derive(Clone)]
pub struct AppContext {
    catalog_service: Arc<CatalogService>,
    analytics: Analytics,
    start_route: Route,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog_service: app.catalog_service(),
            analytics: app.analytics(),
            start_route: app.start_route(),
        }
    }

    #[must_use]
    pub fn catalog_service(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    #[must_use]
    pub fn analytics(&self) -> Analytics {
        self.analytics.clone()
    }

    #[must_use]
    pub fn start_route(&self) -> Route {
        self.start_route
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
