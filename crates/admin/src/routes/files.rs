//! File storage handlers.
//!
//! Uploads happen directly against the store: the admin UI requests a
//! one-time upload URL here, PUTs the binary to it, and then writes the
//! returned storage id into an item's `cover_image` or `gallery`.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use goldstart_core::{FileUrl, StorageId};

use crate::error::Result;
use crate::state::AppState;

/// Build the files router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{storage_id}/url", get(show_url))
        .route("/urls", post(resolve_urls))
        .route("/upload-url", post(upload_url))
}

/// Response for a single URL resolution.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    /// `null` when the storage id does not resolve.
    pub url: Option<String>,
}

/// Request for batch URL resolution.
#[derive(Debug, Deserialize)]
pub struct UrlsRequest {
    pub storage_ids: Vec<StorageId>,
}

/// Response carrying a one-time upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadUrlResponse {
    pub url: String,
}

/// Resolve one storage id to a fetchable URL.
pub async fn show_url(
    State(state): State<AppState>,
    Path(storage_id): Path<StorageId>,
) -> Result<Json<UrlResponse>> {
    let url = state.catalog().file_url(&storage_id).await?;
    Ok(Json(UrlResponse { url }))
}

/// Batch-resolve storage ids; response order matches request order.
pub async fn resolve_urls(
    State(state): State<AppState>,
    Json(body): Json<UrlsRequest>,
) -> Result<Json<Vec<FileUrl>>> {
    let urls = state.catalog().file_urls(&body.storage_ids).await?;
    Ok(Json(urls))
}

/// Generate a one-time-use upload endpoint URL.
pub async fn upload_url(State(state): State<AppState>) -> Result<Json<UploadUrlResponse>> {
    let url = state.catalog().upload_url().await?;
    Ok(Json(UploadUrlResponse { url }))
}
