//! Error taxonomy for store operations.
//!
//! The taxonomy is deliberately small: an operation either targeted a
//! document that does not exist, sent a document the store rejected, or
//! could not reach the store at all. Nothing here is retried; callers
//! decide what to surface.

use thiserror::Error;

/// Errors that can occur when talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport failed (connect, timeout, TLS).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store's response body could not be decoded.
    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The operation targeted an id with no matching document.
    #[error("not found: {0}")]
    NotFound(String),

    /// The store rejected the document (missing or mis-typed field).
    #[error("validation failure: {0}")]
    Validation(String),

    /// The store answered but could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
