//! HTTP client for the managed document store.
//!
//! Speaks the store's JSON API with `reqwest`: collections under
//! `{base}/v1/{collection}`, index scans selected by query parameters,
//! object storage under `{base}/v1/storage`. Every request carries the
//! deployment API key as a bearer token.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use goldstart_core::{
    Category, CategoryId, CategoryInput, FileUrl, Item, ItemId, ItemInput, Mark, MarkId,
    MarkInput, StorageId,
};

use crate::error::StoreError;
use crate::store::DocumentStore;

/// Connection settings for the managed document store.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct StoreConfig {
    /// Deployment base URL (e.g., `https://catalog.store.example`).
    pub base_url: Url,
    /// Deployment API key, sent as a bearer token.
    pub api_key: SecretString,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Client for the managed document store's JSON API.
///
/// Cheaply cloneable; all clones share one connection pool. The client
/// performs no caching and no retries - failures surface to the caller
/// as they happen.
#[derive(Clone)]
pub struct HttpStore {
    inner: Arc<HttpStoreInner>,
}

struct HttpStoreInner {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

/// Error payload the store attaches to non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct UrlBody {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadUrlBody {
    url: String,
}

#[derive(Debug, serde::Serialize)]
struct FileUrlsRequest<'a> {
    storage_ids: &'a [StorageId],
}

impl HttpStore {
    /// Create a new store client.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            inner: Arc::new(HttpStoreInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                api_key: config.api_key.expose_secret().to_string(),
            }),
        }
    }

    /// Build a request to `{base}/v1/{segments...}`.
    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, StoreError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::Unavailable("store base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);

        Ok(self
            .inner
            .client
            .request(method, url)
            .bearer_auth(&self.inner.api_key))
    }

    /// Send a request and decode a JSON body.
    async fn execute<T: DeserializeOwned>(
        builder: reqwest::RequestBuilder,
    ) -> Result<T, StoreError> {
        let response = builder.send().await?;
        let status = response.status();

        // Read as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            return Err(error_for(status, &body));
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse store response"
                );
                Err(StoreError::Parse(e))
            }
        }
    }

    /// Send a request, discarding any success body.
    async fn execute_unit(builder: reqwest::RequestBuilder) -> Result<(), StoreError> {
        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        Err(error_for(status, &body))
    }

    /// Fetch a single document, mapping a 404 to `None`.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<T>, StoreError> {
        match Self::execute(self.request(Method::GET, segments)?).await {
            Ok(doc) => Ok(Some(doc)),
            Err(StoreError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Map a non-success status to the store error taxonomy.
fn error_for(status: StatusCode, body: &str) -> StoreError {
    let message = serde_json::from_str::<ErrorBody>(body).map_or_else(
        |_| body.chars().take(200).collect::<String>(),
        |e| e.error,
    );

    match status {
        StatusCode::NOT_FOUND => StoreError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            StoreError::Validation(message)
        }
        _ => StoreError::Unavailable(format!("HTTP {status}: {message}")),
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    #[instrument(skip(self))]
    async fn categories_by_name(&self) -> Result<Vec<Category>, StoreError> {
        let builder = self
            .request(Method::GET, &["categories"])?
            .query(&[("index", "by_name")]);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn category(&self, id: &CategoryId) -> Result<Option<Category>, StoreError> {
        self.fetch_optional(&["categories", id.as_str()]).await
    }

    #[instrument(skip(self, input))]
    async fn insert_category(&self, input: &CategoryInput) -> Result<Category, StoreError> {
        Self::execute(self.request(Method::POST, &["categories"])?.json(input)).await
    }

    #[instrument(skip(self, input), fields(id = %id))]
    async fn patch_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, StoreError> {
        let builder = self
            .request(Method::PATCH, &["categories", id.as_str()])?
            .json(input);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_category(&self, id: &CategoryId) -> Result<(), StoreError> {
        Self::execute_unit(self.request(Method::DELETE, &["categories", id.as_str()])?).await
    }

    #[instrument(skip(self))]
    async fn marks_by_name(&self) -> Result<Vec<Mark>, StoreError> {
        let builder = self
            .request(Method::GET, &["marks"])?
            .query(&[("index", "by_name")]);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn mark(&self, id: &MarkId) -> Result<Option<Mark>, StoreError> {
        self.fetch_optional(&["marks", id.as_str()]).await
    }

    #[instrument(skip(self, input))]
    async fn insert_mark(&self, input: &MarkInput) -> Result<Mark, StoreError> {
        Self::execute(self.request(Method::POST, &["marks"])?.json(input)).await
    }

    #[instrument(skip(self, input), fields(id = %id))]
    async fn patch_mark(&self, id: &MarkId, input: &MarkInput) -> Result<Mark, StoreError> {
        let builder = self
            .request(Method::PATCH, &["marks", id.as_str()])?
            .json(input);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_mark(&self, id: &MarkId) -> Result<(), StoreError> {
        Self::execute_unit(self.request(Method::DELETE, &["marks", id.as_str()])?).await
    }

    #[instrument(skip(self))]
    async fn items(&self) -> Result<Vec<Item>, StoreError> {
        Self::execute(self.request(Method::GET, &["items"])?).await
    }

    #[instrument(skip(self), fields(category = %category))]
    async fn items_by_category(&self, category: &CategoryId) -> Result<Vec<Item>, StoreError> {
        let builder = self
            .request(Method::GET, &["items"])?
            .query(&[("index", "by_category"), ("category_id", category.as_str())]);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(mark = %mark))]
    async fn items_by_mark(&self, mark: &MarkId) -> Result<Vec<Item>, StoreError> {
        let builder = self
            .request(Method::GET, &["items"])?
            .query(&[("index", "by_mark"), ("mark_id", mark.as_str())]);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(category = %category, mark = %mark))]
    async fn items_by_category_and_mark(
        &self,
        category: &CategoryId,
        mark: &MarkId,
    ) -> Result<Vec<Item>, StoreError> {
        let builder = self.request(Method::GET, &["items"])?.query(&[
            ("index", "by_category_mark"),
            ("category_id", category.as_str()),
            ("mark_id", mark.as_str()),
        ]);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn item(&self, id: &ItemId) -> Result<Option<Item>, StoreError> {
        self.fetch_optional(&["items", id.as_str()]).await
    }

    #[instrument(skip(self, input))]
    async fn insert_item(&self, input: &ItemInput) -> Result<Item, StoreError> {
        Self::execute(self.request(Method::POST, &["items"])?.json(input)).await
    }

    #[instrument(skip(self, input), fields(id = %id))]
    async fn patch_item(&self, id: &ItemId, input: &ItemInput) -> Result<Item, StoreError> {
        let builder = self
            .request(Method::PATCH, &["items", id.as_str()])?
            .json(input);
        Self::execute(builder).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_item(&self, id: &ItemId) -> Result<(), StoreError> {
        Self::execute_unit(self.request(Method::DELETE, &["items", id.as_str()])?).await
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn file_url(&self, id: &StorageId) -> Result<Option<String>, StoreError> {
        let body: UrlBody =
            Self::execute(self.request(Method::GET, &["storage", id.as_str(), "url"])?).await?;
        Ok(body.url)
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn file_urls(&self, ids: &[StorageId]) -> Result<Vec<FileUrl>, StoreError> {
        let builder = self
            .request(Method::POST, &["storage", "urls"])?
            .json(&FileUrlsRequest { storage_ids: ids });
        Self::execute(builder).await
    }

    #[instrument(skip(self))]
    async fn upload_url(&self) -> Result<String, StoreError> {
        let body: UploadUrlBody =
            Self::execute(self.request(Method::POST, &["storage", "upload_url"])?).await?;
        Ok(body.url)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Self::execute_unit(self.request(Method::GET, &["health"])?).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_debug_redacts_api_key() {
        let config = StoreConfig {
            base_url: Url::parse("https://catalog.store.example").unwrap(),
            api_key: SecretString::from("super_secret_deploy_key"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("catalog.store.example"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_deploy_key"));
    }

    #[test]
    fn test_error_for_maps_statuses() {
        let err = error_for(StatusCode::NOT_FOUND, r#"{"error": "no such item"}"#);
        assert!(matches!(err, StoreError::NotFound(m) if m == "no such item"));

        let err = error_for(StatusCode::UNPROCESSABLE_ENTITY, r#"{"error": "bad field"}"#);
        assert!(matches!(err, StoreError::Validation(m) if m == "bad field"));

        let err = error_for(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(err, StoreError::Unavailable(m) if m.contains("upstream down")));
    }

    #[test]
    fn test_error_for_falls_back_to_raw_body() {
        let err = error_for(StatusCode::NOT_FOUND, "plain text");
        assert!(matches!(err, StoreError::NotFound(m) if m == "plain text"));
    }
}
