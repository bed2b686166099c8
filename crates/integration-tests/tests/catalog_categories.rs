//! Category listing and CRUD contract tests.

#![allow(clippy::unwrap_used)]

use goldstart_catalog::{Catalog, StoreError};
use goldstart_core::{CategoryId, CategoryInput};
use goldstart_integration_tests::{MemoryStore, category_input};

#[tokio::test]
async fn list_is_ordered_by_name_ascending() {
    let catalog = Catalog::new(MemoryStore::new());

    for name in ["Screens", "Batteries", "Cables"] {
        catalog.create_category(&category_input(name)).await.unwrap();
    }

    let names: Vec<String> = catalog
        .list_categories(None)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, ["Batteries", "Cables", "Screens"]);
}

#[tokio::test]
async fn list_honors_the_search_term() {
    let catalog = Catalog::new(MemoryStore::new());

    for name in ["Screens", "Batteries", "Screen Protectors"] {
        catalog.create_category(&category_input(name)).await.unwrap();
    }

    let names: Vec<String> = catalog
        .list_categories(Some(" screen "))
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, ["Screen Protectors", "Screens"]);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let catalog = Catalog::new(MemoryStore::new());

    let input = CategoryInput {
        name: "Tablets".to_string(),
        icon: "📱".to_string(),
    };
    let created = catalog.create_category(&input).await.unwrap();
    let fetched = catalog.get_category(&created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Tablets");
    assert_eq!(fetched.icon, "📱");
}

#[tokio::test]
async fn update_replaces_fields_and_requires_existence() {
    let catalog = Catalog::new(MemoryStore::new());
    let created = catalog
        .create_category(&category_input("Speekers"))
        .await
        .unwrap();

    let fixed = CategoryInput {
        name: "Speakers".to_string(),
        icon: "🔊".to_string(),
    };
    let updated = catalog.update_category(&created.id, &fixed).await.unwrap();
    assert_eq!(updated.name, "Speakers");
    assert_eq!(updated.id, created.id);

    let err = catalog
        .update_category(&CategoryId::new("cat_missing"), &fixed)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn remove_missing_category_is_not_found() {
    let catalog = Catalog::new(MemoryStore::new());
    let err = catalog
        .remove_category(&CategoryId::new("cat_missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}
