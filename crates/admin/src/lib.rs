//! Hott Rossi Admin - catalog mutations and remote synchronization.
//!
//! The operator-facing half of the system. Every catalog change flows through
//! the [`gateway::MutationGateway`]: the remote store is written first, the
//! in-memory [`hott_rossi_core::CatalogStore`] is updated only after the
//! remote confirms, and each committed change schedules one external sync
//! call whose outcome the [`sync::SyncStatusTracker`] reports.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`gate`] - The static admin access code
//! - [`remote`] - Remote store trait, REST client, and in-memory test double
//! - [`gateway`] - The mutation gateway
//! - [`sync`] - External sync trigger and status tracker
//! - [`cache`] - Local settings cache
//! - [`bootstrap`] - Startup catalog load

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod gate;
pub mod gateway;
pub mod remote;
pub mod sync;

pub use cache::{CacheError, SettingsCache};
pub use config::{AdminConfig, ConfigError};
pub use gateway::{MutationError, MutationGateway, NewAddon, NewProduct};
pub use remote::{RemoteStore, RemoteStoreError, Table};
pub use sync::{SyncService, SyncStatusTracker, SyncTrigger, SyncTriggerError};
