//! Application state shared across handlers.

use std::sync::Arc;

use goldstart_catalog::store::HttpStore;
use goldstart_catalog::Catalog;

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: Catalog<HttpStore>,
}

impl AppState {
    /// Create a new application state, connecting the catalog to the
    /// configured store.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let catalog = Catalog::new(HttpStore::new(&config.store));

        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog layer.
    #[must_use]
    pub fn catalog(&self) -> &Catalog<HttpStore> {
        &self.inner.catalog
    }
}
