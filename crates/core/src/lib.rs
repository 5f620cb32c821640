//! Hott Rossi Core - Shared domain library.
//!
//! This crate provides the domain model used across all Hott Rossi components:
//! - `storefront` - Cart, order composition, and WhatsApp handoff
//! - `admin` - Catalog mutation gateway and remote synchronization
//! - `cli` - Command-line tools for seeding and management
//!
//! # Architecture
//!
//! The core crate contains types and in-memory state only - no network access,
//! no filesystem access, no HTTP clients. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money formatting, categories, payment methods,
//!   and sync status
//! - [`catalog`] - Product, addon, and settings entities plus the pure
//!   [`Catalog`] collection
//! - [`store`] - The shared [`CatalogStore`] handle over a catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod store;
pub mod types;

pub use catalog::{
    Addon, Catalog, DEFAULT_IMAGE_URL, Product, ProductFlag, SETTINGS_ROW_ID, Settings,
};
pub use store::CatalogStore;
pub use types::*;
