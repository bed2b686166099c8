//! Catalog entities and query inputs.
//!
//! These structs mirror the documents held by the external store. The
//! store assigns `id` and `created_at`; everything else is written by the
//! admin surface. References between entities are raw ids - deleting a
//! category or mark that items still point at leaves dangling references,
//! which readers tolerate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{CategoryId, ItemId, MarkId, StorageId};
use crate::types::price::Price;

/// Top-level grouping of items (e.g., a device type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Opaque icon value - an emoji or an asset key, rendered as-is.
    pub icon: String,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Brand grouping of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub id: MarkId,
    pub name: String,
    /// Opaque icon value - an emoji or an asset key, rendered as-is.
    pub icon: String,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// A named price point under an item (e.g., a part grade or color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub price: Price,
}

/// A catalog entry with price variants, images, and category/mark
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cover_image: StorageId,
    /// Ordered gallery images; absent on the wire means empty.
    #[serde(default)]
    pub gallery: Vec<StorageId>,
    pub category_id: CategoryId,
    pub mark_id: MarkId,
    pub variants: Vec<Variant>,
    /// Creation timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or fully replacing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub icon: String,
}

/// Fields for creating or fully replacing a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkInput {
    pub name: String,
    pub icon: String,
}

/// Fields for creating or fully replacing an item.
///
/// Updates are full-field replaces - there is no partial merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cover_image: StorageId,
    #[serde(default)]
    pub gallery: Vec<StorageId>,
    pub category_id: CategoryId,
    pub mark_id: MarkId,
    pub variants: Vec<Variant>,
}

/// Filter inputs for listing items.
///
/// All fields are optional; an empty filter lists everything. Callers
/// decide which filters to send - there is no "skip" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark_id: Option<MarkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// A resolved storage URL.
///
/// `url` is `None` when the storage id does not resolve (deleted or
/// never uploaded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUrl {
    pub storage_id: StorageId,
    pub url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_item_gallery_defaults_to_empty() {
        let json = r#"{
            "id": "it_1",
            "name": "Screen",
            "cover_image": "st_1",
            "category_id": "cat_1",
            "mark_id": "mk_1",
            "variants": [],
            "created_at": "2026-01-15T09:30:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.gallery.is_empty());
        assert!(item.description.is_none());
    }

    #[test]
    fn test_variant_rejects_negative_price() {
        let json = r#"{"name": "Grade A", "price": "-1"}"#;
        let result: Result<Variant, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_filter_default_is_empty() {
        let filter = ItemFilter::default();
        assert!(filter.category_id.is_none());
        assert!(filter.mark_id.is_none());
        assert!(filter.search.is_none());
    }
}
