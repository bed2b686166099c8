//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (pings the store)
//!
//! # Categories
//! GET    /api/categories            - List categories (optional ?search=)
//! POST   /api/categories            - Create category
//! GET    /api/categories/{id}       - Category detail
//! PUT    /api/categories/{id}       - Replace category fields
//! DELETE /api/categories/{id}       - Remove category
//!
//! # Marks
//! (mirrors categories under /api/marks)
//!
//! # Items
//! GET    /api/items                 - List items (?category_id=&mark_id=&search=)
//! POST   /api/items                 - Create item
//! GET    /api/items/{id}            - Item detail
//! PUT    /api/items/{id}            - Replace item fields
//! DELETE /api/items/{id}            - Remove item
//!
//! # Files
//! GET  /api/files/{storage_id}/url  - Resolve one storage URL
//! POST /api/files/urls              - Batch-resolve storage URLs
//! POST /api/files/upload-url        - Generate a one-time upload URL
//! ```
//!
//! Removing a category or mark that items still reference is allowed;
//! the dangling reference is the operator's to clean up, and readers
//! render a placeholder for it.

pub mod categories;
pub mod files;
pub mod items;
pub mod marks;

use axum::Router;

use crate::state::AppState;

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/categories", categories::router())
        .nest("/api/marks", marks::router())
        .nest("/api/items", items::router())
        .nest("/api/files", files::router())
}
