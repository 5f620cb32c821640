//! Remote store abstraction.
//!
//! The remote store holds three logical tables: `products`, `addons`, and a
//! single-row `settings` table (id = 1). Writes are last-write-wins; there is
//! no client-side locking, versioning, or retry. A failed call is terminal
//! for that invocation and retried only by re-issuing the action.
//!
//! [`rest::RestStore`] talks PostgREST over HTTP; [`memory::MemoryStore`] is
//! the in-memory double used by tests and dry runs.

pub mod dual;
pub mod memory;
pub mod rest;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryStore;
pub use rest::RestStore;

// ============================================================================
// Tables
// ============================================================================

/// Logical tables of the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Products,
    Addons,
    Settings,
}

impl Table {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Addons => "addons",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failures talking to the remote store.
///
/// `Rejected` preserves the remote's response body verbatim so the operator
/// sees exactly what the store said.
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    #[error("remote store transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

// ============================================================================
// Store trait
// ============================================================================

/// Write and read operations against the remote store.
///
/// Rows travel as raw JSON objects; dual-keyed payloads are built by
/// [`dual::dual_keyed`] before they reach the store.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Insert a new row.
    async fn insert(&self, table: Table, row: Value) -> Result<(), RemoteStoreError>;

    /// Patch the row with the given id.
    async fn update(&self, table: Table, id: &str, row: Value) -> Result<(), RemoteStoreError>;

    /// Delete the row with the given id. Deleting a missing row is not an
    /// error; the store converges on the same state either way.
    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteStoreError>;

    /// Insert the row or merge it over an existing one with the same id.
    async fn upsert(&self, table: Table, row: Value) -> Result<(), RemoteStoreError>;

    /// Fetch every row of a table, used by the startup load.
    async fn fetch_all(&self, table: Table) -> Result<Vec<Value>, RemoteStoreError>;
}
