//! Core types for Goldstart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
pub mod price;

pub use catalog::*;
pub use id::*;
pub use price::{NegativePrice, Price};
