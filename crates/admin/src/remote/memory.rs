//! In-memory remote store double.
//!
//! Backs tests and dry runs. Rows live in per-table vectors in insertion
//! order, writes keep a journal for assertions, and failures can be scripted
//! per row or globally. Mirrors PostgREST semantics where they matter: a
//! patch or delete that matches nothing succeeds silently, a duplicate
//! insert is rejected.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::{RemoteStore, RemoteStoreError, Table};

/// A committed write, in call order. Denied writes are not journalled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedWrite {
    Insert { table: Table, id: String },
    Update { table: Table, id: String },
    Delete { table: Table, id: String },
    Upsert { table: Table, id: String },
}

#[derive(Default)]
struct Inner {
    rows: HashMap<Table, Vec<Value>>,
    journal: Vec<RecordedWrite>,
    denied: HashMap<(Table, String), String>,
    offline: Option<String>,
}

/// In-memory [`RemoteStore`] with scripted failure injection.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reject every future write touching `(table, id)` with the given
    /// message, mimicking a per-row constraint failure.
    pub fn deny(&self, table: Table, id: &str, message: &str) {
        self.lock()
            .denied
            .insert((table, id.to_owned()), message.to_owned());
    }

    /// Reject every future call with the given message.
    pub fn go_offline(&self, message: &str) {
        self.lock().offline = Some(message.to_owned());
    }

    /// Committed writes in call order.
    #[must_use]
    pub fn journal(&self) -> Vec<RecordedWrite> {
        self.lock().journal.clone()
    }

    /// Current rows of a table.
    #[must_use]
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.lock().rows.get(&table).cloned().unwrap_or_default()
    }

    /// The row with the given id, if present.
    #[must_use]
    pub fn row(&self, table: Table, id: &str) -> Option<Value> {
        self.rows(table)
            .into_iter()
            .find(|row| row_id(row) == id)
    }
}

impl Inner {
    fn check(&self, table: Table, id: &str) -> Result<(), RemoteStoreError> {
        if let Some(message) = &self.offline {
            return Err(rejected(message));
        }
        if let Some(message) = self.denied.get(&(table, id.to_owned())) {
            return Err(rejected(message));
        }
        Ok(())
    }
}

fn rejected(message: &str) -> RemoteStoreError {
    RemoteStoreError::Rejected {
        status: 500,
        message: message.to_owned(),
    }
}

fn row_id(row: &Value) -> String {
    match row.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    }
}

/// Merge the patch's keys over the stored row, PostgREST PATCH style.
fn merge_into(stored: &mut Value, patch: &Value) {
    if let (Value::Object(stored), Value::Object(patch)) = (stored, patch) {
        for (key, field) in patch {
            stored.insert(key.clone(), field.clone());
        }
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn insert(&self, table: Table, row: Value) -> Result<(), RemoteStoreError> {
        let id = row_id(&row);
        let mut inner = self.lock();
        inner.check(table, &id)?;
        let rows = inner.rows.entry(table).or_default();
        if rows.iter().any(|existing| row_id(existing) == id) {
            return Err(RemoteStoreError::Rejected {
                status: 409,
                message: format!("duplicate key value on {table} id {id}"),
            });
        }
        rows.push(row);
        inner.journal.push(RecordedWrite::Insert { table, id });
        Ok(())
    }

    async fn update(&self, table: Table, id: &str, row: Value) -> Result<(), RemoteStoreError> {
        let mut inner = self.lock();
        inner.check(table, id)?;
        if let Some(stored) = inner
            .rows
            .entry(table)
            .or_default()
            .iter_mut()
            .find(|stored| row_id(stored) == id)
        {
            merge_into(stored, &row);
        }
        inner.journal.push(RecordedWrite::Update {
            table,
            id: id.to_owned(),
        });
        Ok(())
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteStoreError> {
        let mut inner = self.lock();
        inner.check(table, id)?;
        inner
            .rows
            .entry(table)
            .or_default()
            .retain(|stored| row_id(stored) != id);
        inner.journal.push(RecordedWrite::Delete {
            table,
            id: id.to_owned(),
        });
        Ok(())
    }

    async fn upsert(&self, table: Table, row: Value) -> Result<(), RemoteStoreError> {
        let id = row_id(&row);
        let mut inner = self.lock();
        inner.check(table, &id)?;
        let rows = inner.rows.entry(table).or_default();
        if let Some(stored) = rows.iter_mut().find(|stored| row_id(stored) == id) {
            merge_into(stored, &row);
        } else {
            rows.push(row);
        }
        inner.journal.push(RecordedWrite::Upsert { table, id });
        Ok(())
    }

    async fn fetch_all(&self, table: Table) -> Result<Vec<Value>, RemoteStoreError> {
        let inner = self.lock();
        if let Some(message) = &inner.offline {
            return Err(rejected(message));
        }
        Ok(inner.rows.get(&table).cloned().unwrap_or_default())
    }
}
