//! Lexic Core - Catalog, cart and shared types.
//!
//! This crate provides the data model used by every Lexic component:
//! - `storefront` - Widget state, view models and the preview host
//! - `cli` - Catalog validation and static page rendering
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no
//! logging, no rendering. This keeps it lightweight and allows it to be used
//! by any rendering host.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, sizes and selections
//! - [`catalog`] - The ordered, immutable product catalog
//! - [`cart`] - Session cart with merge-by-key line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod types;

pub use cart::{Cart, CartItem, CartLine};
pub use catalog::{Catalog, CatalogError, Product};
pub use types::*;
