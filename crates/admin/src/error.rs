//! Unified error handling with Sentry integration.
//!
//! Mirrors the storefront's policy: store failures map to the smallest
//! honest status code, server-side failures are captured to Sentry, and
//! response bodies never leak internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use goldstart_catalog::StoreError;

/// Application-level error type for the admin API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::Internal(_)
                | Self::Store(
                    StoreError::Http(_) | StoreError::Parse(_) | StoreError::Unavailable(_)
                )
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(err) => match err {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                StoreError::Http(_) | StoreError::Parse(_) | StoreError::Unavailable(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            Self::Store(err) => match err {
                StoreError::NotFound(_) | StoreError::Validation(_) => err.to_string(),
                StoreError::Http(_) | StoreError::Parse(_) | StoreError::Unavailable(_) => {
                    "Store unavailable".to_string()
                }
            },
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_propagates_from_store() {
        let err = AppError::Store(StoreError::NotFound("categories/cat_9".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_unprocessable() {
        let err = AppError::Store(StoreError::Validation("price".to_string()));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
