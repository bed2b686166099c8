//! Goldstart Core - Shared types library.
//!
//! This crate provides common types used across all Goldstart components:
//! - `catalog` - Catalog query layer and document store client
//! - `storefront` - Public browse API
//! - `admin` - Internal administration API (network-isolated)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, catalog
//!   entities, and query filter inputs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
