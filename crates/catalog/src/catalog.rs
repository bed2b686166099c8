//! The catalog query layer.

use goldstart_core::{
    Category, CategoryId, CategoryInput, FileUrl, Item, ItemFilter, ItemId, ItemInput, Mark,
    MarkId, MarkInput, StorageId,
};

use crate::error::StoreError;
use crate::filter;
use crate::store::DocumentStore;

/// Deterministic catalog queries and mutations over a document store.
///
/// Listing is total: any combination of filters is valid, an id with no
/// matching documents yields an empty result, and repeated calls with no
/// intervening writes return the same sequence. Mutations are single-
/// document and all-or-nothing; store failures propagate unmodified.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    store: S,
}

impl<S: DocumentStore> Catalog<S> {
    /// Create a catalog over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reachability probe for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// List categories ordered by name ascending, optionally narrowed by
    /// a case-insensitive name substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn list_categories(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<Category>, StoreError> {
        let categories = self.store.categories_by_name().await?;
        Ok(match filter::term(search) {
            Some(term) => categories
                .into_iter()
                .filter(|c| filter::name_matches(&c.name, &term))
                .collect(),
            None => categories,
        })
    }

    /// Get a category by id, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn get_category(&self, id: &CategoryId) -> Result<Option<Category>, StoreError> {
        self.store.category(id).await
    }

    /// Create a category, returning the stored entity with its assigned
    /// id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the fields or the request
    /// fails.
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, StoreError> {
        self.store.insert_category(input).await
    }

    /// Replace a category's fields.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    pub async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, StoreError> {
        self.store.patch_category(id, input).await
    }

    /// Remove a category by id. Not idempotent: removing an id that does
    /// not exist fails with [`StoreError::NotFound`]. Items referencing
    /// the category are left untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    pub async fn remove_category(&self, id: &CategoryId) -> Result<(), StoreError> {
        self.store.delete_category(id).await
    }

    // =========================================================================
    // Marks
    // =========================================================================

    /// List marks ordered by name ascending, optionally narrowed by a
    /// case-insensitive name substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn list_marks(&self, search: Option<&str>) -> Result<Vec<Mark>, StoreError> {
        let marks = self.store.marks_by_name().await?;
        Ok(match filter::term(search) {
            Some(term) => marks
                .into_iter()
                .filter(|m| filter::name_matches(&m.name, &term))
                .collect(),
            None => marks,
        })
    }

    /// Get a mark by id, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn get_mark(&self, id: &MarkId) -> Result<Option<Mark>, StoreError> {
        self.store.mark(id).await
    }

    /// Create a mark.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the fields or the request
    /// fails.
    pub async fn create_mark(&self, input: &MarkInput) -> Result<Mark, StoreError> {
        self.store.insert_mark(input).await
    }

    /// Replace a mark's fields.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    pub async fn update_mark(&self, id: &MarkId, input: &MarkInput) -> Result<Mark, StoreError> {
        self.store.patch_mark(id, input).await
    }

    /// Remove a mark by id. Not idempotent; dangling item references are
    /// left in place.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    pub async fn remove_mark(&self, id: &MarkId) -> Result<(), StoreError> {
        self.store.delete_mark(id).await
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// List items matching the filter.
    ///
    /// Selection picks the narrowest index: both ids present means the
    /// composite (category, mark) lookup, one id means that id's index,
    /// neither means a full scan. The search term then narrows by
    /// trimmed, case-folded substring match on the item name; a
    /// whitespace-only term narrows nothing. Ordering is store order and
    /// stable between writes. No pagination - the full matching set is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store request fails; no filter
    /// combination is itself an error.
    pub async fn list_items(&self, item_filter: &ItemFilter) -> Result<Vec<Item>, StoreError> {
        let items = match (&item_filter.category_id, &item_filter.mark_id) {
            (Some(category), Some(mark)) => {
                self.store.items_by_category_and_mark(category, mark).await?
            }
            (Some(category), None) => self.store.items_by_category(category).await?,
            (None, Some(mark)) => self.store.items_by_mark(mark).await?,
            (None, None) => self.store.items().await?,
        };

        Ok(match filter::term(item_filter.search.as_deref()) {
            Some(term) => items
                .into_iter()
                .filter(|i| filter::name_matches(&i.name, &term))
                .collect(),
            None => items,
        })
    }

    /// Get an item by id, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn get_item(&self, id: &ItemId) -> Result<Option<Item>, StoreError> {
        self.store.item(id).await
    }

    /// Create an item, returning the stored entity with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the fields or the request
    /// fails.
    pub async fn create_item(&self, input: &ItemInput) -> Result<Item, StoreError> {
        self.store.insert_item(input).await
    }

    /// Replace an item's fields (full-field replace, no partial merge).
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    pub async fn update_item(&self, id: &ItemId, input: &ItemInput) -> Result<Item, StoreError> {
        self.store.patch_item(id, input).await
    }

    /// Remove an item by id. Not idempotent.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the id does not exist.
    pub async fn remove_item(&self, id: &ItemId) -> Result<(), StoreError> {
        self.store.delete_item(id).await
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Resolve one storage id to a fetchable URL, `None` when the id
    /// does not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn file_url(&self, id: &StorageId) -> Result<Option<String>, StoreError> {
        self.store.file_url(id).await
    }

    /// Batch-resolve storage ids. Output order matches input order;
    /// unresolvable ids carry a `None` URL rather than being dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn file_urls(&self, ids: &[StorageId]) -> Result<Vec<FileUrl>, StoreError> {
        self.store.file_urls(ids).await
    }

    /// Generate a one-time-use upload endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the store request fails.
    pub async fn upload_url(&self) -> Result<String, StoreError> {
        self.store.upload_url().await
    }
}
