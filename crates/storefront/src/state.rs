//! Application state shared across handlers.

use std::sync::Arc;

use goldstart_catalog::store::HttpStore;
use goldstart_catalog::Catalog;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the catalog layer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog<HttpStore>,
}

impl AppState {
    /// Create a new application state, connecting the catalog to the
    /// configured store.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::new(HttpStore::new(&config.store));

        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog layer.
    #[must_use]
    pub fn catalog(&self) -> &Catalog<HttpStore> {
        &self.inner.catalog
    }
}
