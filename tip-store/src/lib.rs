//! JSON-file implementation of the tip-core state store.
//!
//! The whole keyspace lives in a single JSON object document on disk. Reads
//! tolerate a missing or corrupt document (the store opens empty, with a
//! logged warning); every write serializes the full document and replaces
//! the file atomically via a temp-file rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tip_core::{StateStore, StorageError};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

pub struct JsonFileStore {
    path: PathBuf,
    cells: Mutex<BTreeMap<String, Value>>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading the current document if present.
    ///
    /// A missing file is an empty store. A document that cannot be parsed
    /// also opens as an empty store, with a logged warning; corrupt
    /// persisted state must never block startup.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let cells = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, Value>>(&bytes) {
                Ok(document) => document,
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "corrupt state document; starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Read(e.to_string())),
        };

        Ok(Self {
            path,
            cells: Mutex::new(cells),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full document and swap it into place with one rename.
    async fn persist(&self, cells: &BTreeMap<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::Write(e.to_string()))?;
            }
        }

        let bytes =
            serde_json::to_vec_pretty(cells).map_err(|e| StorageError::Write(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn read(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.cells.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut cells = self.cells.lock().await;
        cells.insert(key.to_string(), value);
        self.persist(&cells).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cells = self.cells.lock().await;
        if cells.remove(key).is_some() {
            self.persist(&cells).await?;
        }
        Ok(())
    }
}
