//! Item query/filter contract tests.
//!
//! Store state for most tests:
//! - A "Screen"           in category C1, mark M1
//! - B "Battery"          in category C1, mark M2
//! - C "Screen Protector" in category C2, mark M1

#![allow(clippy::unwrap_used)]

use goldstart_catalog::{Catalog, StoreError};
use goldstart_core::{CategoryId, ItemFilter, ItemId, MarkId};
use goldstart_integration_tests::{MemoryStore, category_input, item_input, mark_input};

struct Seeded {
    catalog: Catalog<MemoryStore>,
    c1: CategoryId,
    c2: CategoryId,
    m1: MarkId,
    m2: MarkId,
}

async fn seeded() -> Seeded {
    let catalog = Catalog::new(MemoryStore::new());

    let c1 = catalog
        .create_category(&category_input("Phones"))
        .await
        .unwrap()
        .id;
    let c2 = catalog
        .create_category(&category_input("Accessories"))
        .await
        .unwrap()
        .id;
    let m1 = catalog.create_mark(&mark_input("Acme")).await.unwrap().id;
    let m2 = catalog.create_mark(&mark_input("Volta")).await.unwrap().id;

    catalog
        .create_item(&item_input("Screen", &c1, &m1))
        .await
        .unwrap();
    catalog
        .create_item(&item_input("Battery", &c1, &m2))
        .await
        .unwrap();
    catalog
        .create_item(&item_input("Screen Protector", &c2, &m1))
        .await
        .unwrap();

    Seeded {
        catalog,
        c1,
        c2,
        m1,
        m2,
    }
}

async fn names(catalog: &Catalog<MemoryStore>, filter: &ItemFilter) -> Vec<String> {
    catalog
        .list_items(filter)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect()
}

#[tokio::test]
async fn no_filters_lists_everything() {
    let s = seeded().await;
    let listed = names(&s.catalog, &ItemFilter::default()).await;
    assert_eq!(listed, ["Screen", "Battery", "Screen Protector"]);
}

#[tokio::test]
async fn category_filter_selects_by_category() {
    let s = seeded().await;
    let filter = ItemFilter {
        category_id: Some(s.c1.clone()),
        ..ItemFilter::default()
    };
    assert_eq!(names(&s.catalog, &filter).await, ["Screen", "Battery"]);
}

#[tokio::test]
async fn mark_filter_selects_by_mark() {
    let s = seeded().await;
    let filter = ItemFilter {
        mark_id: Some(s.m1.clone()),
        ..ItemFilter::default()
    };
    assert_eq!(
        names(&s.catalog, &filter).await,
        ["Screen", "Screen Protector"]
    );
}

#[tokio::test]
async fn both_filters_use_the_composite_lookup() {
    let s = seeded().await;
    let filter = ItemFilter {
        category_id: Some(s.c1.clone()),
        mark_id: Some(s.m1.clone()),
        search: None,
    };
    assert_eq!(names(&s.catalog, &filter).await, ["Screen"]);
}

#[tokio::test]
async fn unknown_ids_yield_empty_without_error() {
    let s = seeded().await;
    let filter = ItemFilter {
        category_id: Some(CategoryId::new("cat_nope")),
        mark_id: Some(MarkId::new("mk_nope")),
        search: None,
    };
    assert!(names(&s.catalog, &filter).await.is_empty());
}

#[tokio::test]
async fn search_is_trimmed_and_case_folded() {
    let s = seeded().await;
    let filter = ItemFilter {
        search: Some("  SCREEN ".to_string()),
        ..ItemFilter::default()
    };
    assert_eq!(
        names(&s.catalog, &filter).await,
        ["Screen", "Screen Protector"]
    );
}

#[tokio::test]
async fn whitespace_search_applies_no_filtering() {
    let s = seeded().await;
    let all = names(&s.catalog, &ItemFilter::default()).await;

    for search in ["", "   ", "\t"] {
        let filter = ItemFilter {
            search: Some(search.to_string()),
            ..ItemFilter::default()
        };
        assert_eq!(names(&s.catalog, &filter).await, all);
    }
}

#[tokio::test]
async fn search_composes_with_category_filter() {
    let s = seeded().await;
    let filter = ItemFilter {
        category_id: Some(s.c1.clone()),
        mark_id: None,
        search: Some("screen".to_string()),
    };
    assert_eq!(names(&s.catalog, &filter).await, ["Screen"]);
}

#[tokio::test]
async fn repeated_calls_are_stable_without_writes() {
    let s = seeded().await;
    let filter = ItemFilter {
        mark_id: Some(s.m1.clone()),
        ..ItemFilter::default()
    };

    let first = s.catalog.list_items(&filter).await.unwrap();
    let second = s.catalog.list_items(&filter).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let s = seeded().await;

    let mut input = item_input("Camera Module", &s.c2, &s.m2);
    input.description = Some("Rear camera, 48MP".to_string());

    let created = s.catalog.create_item(&input).await.unwrap();
    let fetched = s.catalog.get_item(&created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, input.name);
    assert_eq!(fetched.description, input.description);
    assert_eq!(fetched.cover_image, input.cover_image);
    assert_eq!(fetched.gallery, input.gallery);
    assert_eq!(fetched.category_id, input.category_id);
    assert_eq!(fetched.mark_id, input.mark_id);
    assert_eq!(fetched.variants, input.variants);
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let s = seeded().await;
    let created = s
        .catalog
        .create_item(&item_input("Speaker", &s.c1, &s.m1))
        .await
        .unwrap();

    let mut replacement = item_input("Loudspeaker", &s.c2, &s.m2);
    replacement.description = Some("Bottom-firing".to_string());
    let updated = s.catalog.update_item(&created.id, &replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Loudspeaker");
    assert_eq!(updated.category_id, s.c2);
    assert_eq!(updated.mark_id, s.m2);
    assert_eq!(updated.description.as_deref(), Some("Bottom-firing"));
}

#[tokio::test]
async fn update_missing_item_is_not_found() {
    let s = seeded().await;
    let err = s
        .catalog
        .update_item(&ItemId::new("it_missing"), &item_input("X", &s.c1, &s.m1))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn remove_is_not_idempotent() {
    let s = seeded().await;
    let created = s
        .catalog
        .create_item(&item_input("Antenna", &s.c1, &s.m1))
        .await
        .unwrap();

    s.catalog.remove_item(&created.id).await.unwrap();
    assert!(s.catalog.get_item(&created.id).await.unwrap().is_none());

    let err = s.catalog.remove_item(&created.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[tokio::test]
async fn deleting_a_category_leaves_dangling_references() {
    let s = seeded().await;

    s.catalog.remove_category(&s.c1).await.unwrap();

    // The category is gone...
    assert!(s.catalog.get_category(&s.c1).await.unwrap().is_none());

    // ...but its items remain listable, references intact.
    let filter = ItemFilter {
        category_id: Some(s.c1.clone()),
        ..ItemFilter::default()
    };
    let orphans = s.catalog.list_items(&filter).await.unwrap();
    assert_eq!(orphans.len(), 2);
    assert!(orphans.iter().all(|i| i.category_id == s.c1));
}
