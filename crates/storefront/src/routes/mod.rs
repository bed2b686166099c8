//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (pings the store)
//!
//! # Categories
//! GET  /api/categories              - List categories (optional ?search=)
//! GET  /api/categories/{id}         - Category detail
//!
//! # Marks
//! GET  /api/marks                   - List marks (optional ?search=)
//! GET  /api/marks/{id}              - Mark detail
//!
//! # Items
//! GET  /api/items                   - List items (?category_id=&mark_id=&search=)
//! GET  /api/items/{id}              - Item detail
//!
//! # Files
//! GET  /api/files/{storage_id}/url  - Resolve one storage URL
//! POST /api/files/urls              - Batch-resolve storage URLs
//! ```
//!
//! The storefront is read-only by construction: no mutating route is
//! registered here. Administration happens in the separate admin binary.

pub mod categories;
pub mod files;
pub mod items;
pub mod marks;

use axum::Router;

use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/categories", categories::router())
        .nest("/api/marks", marks::router())
        .nest("/api/items", items::router())
        .nest("/api/files", files::router())
}
