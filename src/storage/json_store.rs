//! Directory-backed key/value JSON storage.
//!
//! Each key maps to one `<key>.json` document under the store's root
//! directory. Reads never fail the caller: a missing or corrupt document
//! simply yields `None` so the application starts from empty state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{LeaveError, LeaveResult};

/// A key-to-JSON-document store rooted at a directory.
///
/// # Example
///
/// ```no_run
/// use leave_engine::storage::JsonStore;
///
/// let store = JsonStore::open("./data")?;
/// store.set("user", &serde_json::json!({"role": "employee", "name": "Kavya M"}))?;
/// # Ok::<(), leave_engine::error::LeaveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open<P: Into<PathBuf>>(root: P) -> LeaveResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| LeaveError::Storage {
            path: root.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { root })
    }

    /// Returns the root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads and deserializes the document stored under `key`.
    ///
    /// Returns `None` when the document does not exist or cannot be parsed;
    /// corrupt documents are logged and otherwise ignored.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.document_path(key);
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    key,
                    path = %path.display(),
                    error = %e,
                    "ignoring corrupt stored document"
                );
                None
            }
        }
    }

    /// Serializes `value` and writes it under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> LeaveResult<()> {
        let path = self.document_path(key);
        let json = serde_json::to_string_pretty(value).map_err(|e| LeaveError::Storage {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|e| LeaveError::Storage {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Removes the document stored under `key`, if present.
    pub fn remove(&self, key: &str) {
        let path = self.document_path(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(key, path = %path.display(), error = %e, "failed to remove document");
            }
        }
    }
}
