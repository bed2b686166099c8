//! Goldstart catalog query layer.
//!
//! # Architecture
//!
//! - All durable state lives in an external managed document store; this
//!   crate holds no storage engine and no cache.
//! - [`store::DocumentStore`] captures the store primitives the catalog
//!   composes: name-index scans, item index lookups, single-document
//!   reads and writes, and object-storage URL resolution.
//! - [`store::HttpStore`] speaks the store's JSON API over HTTP.
//! - [`Catalog`] implements the query contract on top: deterministic
//!   filtered listings plus create/update/remove pass-throughs. Failures
//!   surface to the caller unmodified - no retries, no partial results.
//!
//! # Example
//!
//! ```rust,ignore
//! use goldstart_catalog::{Catalog, store::{HttpStore, StoreConfig}};
//! use goldstart_core::ItemFilter;
//!
//! let store = HttpStore::new(&config)?;
//! let catalog = Catalog::new(store);
//!
//! let screens = catalog
//!     .list_items(&ItemFilter {
//!         category_id: Some(phones.clone()),
//!         search: Some("screen".into()),
//!         ..ItemFilter::default()
//!     })
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod catalog;
mod error;
mod filter;
pub mod store;

pub use catalog::Catalog;
pub use error::StoreError;
