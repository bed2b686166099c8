//! Document store abstraction.
//!
//! The external store owns persistence, indexing, and concurrency
//! control; this trait captures only the primitives the catalog composes.
//! Single-document operations are read-after-write consistent. Index
//! scans return documents in index order (ascending for name indexes,
//! insertion order otherwise).
//!
//! [`HttpStore`] implements the trait against the managed backend's JSON
//! API. Tests provide an in-memory implementation.

mod http;

pub use http::{HttpStore, StoreConfig};

use async_trait::async_trait;

use goldstart_core::{
    Category, CategoryId, CategoryInput, FileUrl, Item, ItemId, ItemInput, Mark, MarkId,
    MarkInput, StorageId,
};

use crate::error::StoreError;

/// Store primitives over the three catalog collections and object
/// storage.
///
/// `get`-style methods return `Ok(None)` for an absent document; `patch`
/// and `delete` fail with [`StoreError::NotFound`] instead, because a
/// write against a missing id is a caller error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // Categories

    /// All categories in name-index order, ascending.
    async fn categories_by_name(&self) -> Result<Vec<Category>, StoreError>;

    async fn category(&self, id: &CategoryId) -> Result<Option<Category>, StoreError>;

    async fn insert_category(&self, input: &CategoryInput) -> Result<Category, StoreError>;

    async fn patch_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, StoreError>;

    async fn delete_category(&self, id: &CategoryId) -> Result<(), StoreError>;

    // Marks

    /// All marks in name-index order, ascending.
    async fn marks_by_name(&self) -> Result<Vec<Mark>, StoreError>;

    async fn mark(&self, id: &MarkId) -> Result<Option<Mark>, StoreError>;

    async fn insert_mark(&self, input: &MarkInput) -> Result<Mark, StoreError>;

    async fn patch_mark(&self, id: &MarkId, input: &MarkInput) -> Result<Mark, StoreError>;

    async fn delete_mark(&self, id: &MarkId) -> Result<(), StoreError>;

    // Items

    /// Full item scan in the store's default (insertion) order.
    async fn items(&self) -> Result<Vec<Item>, StoreError>;

    async fn items_by_category(&self, category: &CategoryId) -> Result<Vec<Item>, StoreError>;

    async fn items_by_mark(&self, mark: &MarkId) -> Result<Vec<Item>, StoreError>;

    /// Composite-index lookup on (category, mark).
    async fn items_by_category_and_mark(
        &self,
        category: &CategoryId,
        mark: &MarkId,
    ) -> Result<Vec<Item>, StoreError>;

    async fn item(&self, id: &ItemId) -> Result<Option<Item>, StoreError>;

    async fn insert_item(&self, input: &ItemInput) -> Result<Item, StoreError>;

    async fn patch_item(&self, id: &ItemId, input: &ItemInput) -> Result<Item, StoreError>;

    async fn delete_item(&self, id: &ItemId) -> Result<(), StoreError>;

    // Object storage

    /// Resolve one storage id to a fetchable URL, `None` if unresolvable.
    async fn file_url(&self, id: &StorageId) -> Result<Option<String>, StoreError>;

    /// Batch-resolve storage ids; output order matches input order.
    async fn file_urls(&self, ids: &[StorageId]) -> Result<Vec<FileUrl>, StoreError>;

    /// Generate a one-time-use upload endpoint URL.
    async fn upload_url(&self) -> Result<String, StoreError>;

    /// Cheap reachability probe for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
