//! The persistence seam: a string-keyed JSON key-value store.
//!
//! Backends implement [`StateStore`]; everything else goes through the typed
//! accessors, which encode the degradation policy: missing, unreadable, or
//! malformed stored values load as defaults (logged), while write failures
//! propagate so the front-end can surface a non-fatal "could not save"
//! notice.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::ledger::HistoryLedger;
use crate::models::{HistoryRecord, Theme};

/// Key for the persisted display theme (`"light" | "dark"`).
pub const THEME_KEY: &str = "theme";
/// Key for the serialized history array, newest first.
pub const HISTORY_KEY: &str = "history";
/// Key for the round-up-tip default flag.
pub const ROUNDING_KEY: &str = "roundingPreference";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage read error: {0}")]
    Read(String),

    #[error("Storage write error: {0}")]
    Write(String),
}

/// String-keyed JSON store the calculator persists through.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<Value>, StorageError>;
    async fn write(&self, key: &str, value: Value) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a key, falling back to `T::default()` on every failure path.
async fn read_or_default<T>(store: &dyn StateStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let value = match store.read(key).await {
        Ok(Some(value)) => value,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!(key, error = %e, "stored value unreadable; using the default");
            return T::default();
        }
    };

    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(key, error = %e, "stored value malformed; using the default");
        T::default()
    })
}

/// Load the ledger from the store.
///
/// Missing, unreadable, or malformed history loads as an empty ledger,
/// never an error.
pub async fn load_history(store: &dyn StateStore) -> HistoryLedger {
    let records: Vec<HistoryRecord> = read_or_default(store, HISTORY_KEY).await;
    HistoryLedger::from_records(records)
}

/// Persist the full ledger under [`HISTORY_KEY`].
pub async fn save_history(
    store: &dyn StateStore,
    ledger: &HistoryLedger,
) -> Result<(), StorageError> {
    let value =
        serde_json::to_value(ledger.records()).map_err(|e| StorageError::Write(e.to_string()))?;
    store.write(HISTORY_KEY, value).await
}

pub async fn load_theme(store: &dyn StateStore) -> Theme {
    read_or_default(store, THEME_KEY).await
}

pub async fn save_theme(store: &dyn StateStore, theme: Theme) -> Result<(), StorageError> {
    let value = serde_json::to_value(theme).map_err(|e| StorageError::Write(e.to_string()))?;
    store.write(THEME_KEY, value).await
}

/// Load the round-up-tip default; `false` when unset.
pub async fn load_rounding(store: &dyn StateStore) -> bool {
    read_or_default(store, ROUNDING_KEY).await
}

pub async fn save_rounding(store: &dyn StateStore, round_up: bool) -> Result<(), StorageError> {
    store.write(ROUNDING_KEY, Value::Bool(round_up)).await
}

/// In-process [`StateStore`] for tests and embedders that do not need a file
/// on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let cells = self
            .cells
            .lock()
            .map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(cells.get(key).cloned())
    }

    async fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut cells = self
            .cells
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        cells.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cells = self
            .cells
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        cells.remove(key);
        Ok(())
    }
}
