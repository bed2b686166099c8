//! Test support for Goldstart integration tests.
//!
//! Provides [`MemoryStore`], an in-memory [`DocumentStore`] with the same
//! observable behavior as the managed backend: monotonic ids and creation
//! timestamps, insertion-order scans, ascending name-index scans, and
//! NotFound on writes against missing ids. Catalog contract tests run
//! against it without any network.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use goldstart_catalog::StoreError;
use goldstart_catalog::store::DocumentStore;
use goldstart_core::{
    Category, CategoryId, CategoryInput, FileUrl, Item, ItemId, ItemInput, Mark, MarkId,
    MarkInput, Price, StorageId, Variant,
};

/// In-memory document store for hermetic tests.
///
/// Documents live in insertion-order vectors; name-index scans sort a
/// copy ascending, mirroring the backend's index order.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    marks: Vec<Mark>,
    items: Vec<Item>,
    files: HashMap<StorageId, String>,
    sequence: u64,
}

impl Inner {
    /// Next id/timestamp tick. Creation timestamps advance one second
    /// per write so ordering assertions stay deterministic.
    fn tick(&mut self) -> (u64, DateTime<Utc>) {
        self.sequence += 1;
        let at = DateTime::from_timestamp(1_750_000_000 + i64::try_from(self.sequence).expect("sequence fits i64"), 0)
            .expect("valid timestamp");
        (self.sequence, at)
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stored file so its id resolves to a URL.
    pub fn put_file(&self, id: &StorageId, url: &str) {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.files.insert(id.clone(), url.to_string());
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn categories_by_name(&self) -> Result<Vec<Category>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut categories = inner.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn category(&self, id: &CategoryId) -> Result<Option<Category>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.categories.iter().find(|c| &c.id == id).cloned())
    }

    async fn insert_category(&self, input: &CategoryInput) -> Result<Category, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let (sequence, created_at) = inner.tick();
        let category = Category {
            id: CategoryId::new(format!("cat_{sequence}")),
            name: input.name.clone(),
            icon: input.icon.clone(),
            created_at,
        };
        inner.categories.push(category.clone());
        Ok(category)
    }

    async fn patch_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let category = inner
            .categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("categories/{id}")))?;
        category.name = input.name.clone();
        category.icon = input.icon.clone();
        Ok(category.clone())
    }

    async fn delete_category(&self, id: &CategoryId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let before = inner.categories.len();
        inner.categories.retain(|c| &c.id != id);
        if inner.categories.len() == before {
            return Err(StoreError::NotFound(format!("categories/{id}")));
        }
        Ok(())
    }

    async fn marks_by_name(&self) -> Result<Vec<Mark>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut marks = inner.marks.clone();
        marks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(marks)
    }

    async fn mark(&self, id: &MarkId) -> Result<Option<Mark>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.marks.iter().find(|m| &m.id == id).cloned())
    }

    async fn insert_mark(&self, input: &MarkInput) -> Result<Mark, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let (sequence, created_at) = inner.tick();
        let mark = Mark {
            id: MarkId::new(format!("mk_{sequence}")),
            name: input.name.clone(),
            icon: input.icon.clone(),
            created_at,
        };
        inner.marks.push(mark.clone());
        Ok(mark)
    }

    async fn patch_mark(&self, id: &MarkId, input: &MarkInput) -> Result<Mark, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let mark = inner
            .marks
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("marks/{id}")))?;
        mark.name = input.name.clone();
        mark.icon = input.icon.clone();
        Ok(mark.clone())
    }

    async fn delete_mark(&self, id: &MarkId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let before = inner.marks.len();
        inner.marks.retain(|m| &m.id != id);
        if inner.marks.len() == before {
            return Err(StoreError::NotFound(format!("marks/{id}")));
        }
        Ok(())
    }

    async fn items(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.items.clone())
    }

    async fn items_by_category(&self, category: &CategoryId) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .items
            .iter()
            .filter(|i| &i.category_id == category)
            .cloned()
            .collect())
    }

    async fn items_by_mark(&self, mark: &MarkId) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .items
            .iter()
            .filter(|i| &i.mark_id == mark)
            .cloned()
            .collect())
    }

    async fn items_by_category_and_mark(
        &self,
        category: &CategoryId,
        mark: &MarkId,
    ) -> Result<Vec<Item>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .items
            .iter()
            .filter(|i| &i.category_id == category && &i.mark_id == mark)
            .cloned()
            .collect())
    }

    async fn item(&self, id: &ItemId) -> Result<Option<Item>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.items.iter().find(|i| &i.id == id).cloned())
    }

    async fn insert_item(&self, input: &ItemInput) -> Result<Item, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let (sequence, created_at) = inner.tick();
        let item = Item {
            id: ItemId::new(format!("it_{sequence}")),
            name: input.name.clone(),
            description: input.description.clone(),
            cover_image: input.cover_image.clone(),
            gallery: input.gallery.clone(),
            category_id: input.category_id.clone(),
            mark_id: input.mark_id.clone(),
            variants: input.variants.clone(),
            created_at,
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn patch_item(&self, id: &ItemId, input: &ItemInput) -> Result<Item, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let item = inner
            .items
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("items/{id}")))?;
        item.name = input.name.clone();
        item.description = input.description.clone();
        item.cover_image = input.cover_image.clone();
        item.gallery = input.gallery.clone();
        item.category_id = input.category_id.clone();
        item.mark_id = input.mark_id.clone();
        item.variants = input.variants.clone();
        Ok(item.clone())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let before = inner.items.len();
        inner.items.retain(|i| &i.id != id);
        if inner.items.len() == before {
            return Err(StoreError::NotFound(format!("items/{id}")));
        }
        Ok(())
    }

    async fn file_url(&self, id: &StorageId) -> Result<Option<String>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner.files.get(id).cloned())
    }

    async fn file_urls(&self, ids: &[StorageId]) -> Result<Vec<FileUrl>, StoreError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(ids
            .iter()
            .map(|id| FileUrl {
                storage_id: id.clone(),
                url: inner.files.get(id).cloned(),
            })
            .collect())
    }

    async fn upload_url(&self) -> Result<String, StoreError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let (sequence, _) = inner.tick();
        Ok(format!("memory://upload/{sequence}"))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A price from whole cents.
#[must_use]
#[allow(clippy::missing_panics_doc)] // non-negative by construction
pub fn price(cents: u32) -> Price {
    Price::new(Decimal::new(i64::from(cents), 2)).expect("non-negative")
}

#[must_use]
pub fn category_input(name: &str) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        icon: "📦".to_string(),
    }
}

#[must_use]
pub fn mark_input(name: &str) -> MarkInput {
    MarkInput {
        name: name.to_string(),
        icon: "🏷".to_string(),
    }
}

/// An item with one variant and no gallery.
#[must_use]
pub fn item_input(name: &str, category_id: &CategoryId, mark_id: &MarkId) -> ItemInput {
    ItemInput {
        name: name.to_string(),
        description: None,
        cover_image: StorageId::new(format!("st_{}", name.to_lowercase().replace(' ', "_"))),
        gallery: Vec::new(),
        category_id: category_id.clone(),
        mark_id: mark_id.clone(),
        variants: vec![Variant {
            name: "Standard".to_string(),
            price: price(1999),
        }],
    }
}
