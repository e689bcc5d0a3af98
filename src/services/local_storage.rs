//! Local Storage
//!
//! A small string key-value store backed by one JSON file, mirroring the
//! browser `localStorage` API (`getItem` / `setItem` / `removeItem`).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::Result;
use crate::utils::fs::{get_or_create_data_dir, write_atomic};

/// File name of the store inside the data directory
pub const STORAGE_FILE: &str = "local_storage.json";

/// File-backed key-value store
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl LocalStorage {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store. An unreadable one is logged and
    /// treated as empty; it is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match Self::read_items(&path) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable local storage");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), keys = items.len(), "Opened local storage");
        Self {
            path,
            items: Mutex::new(items),
        }
    }

    /// Open the store in the application data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(get_or_create_data_dir()?.join(STORAGE_FILE)))
    }

    fn read_items(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_vec(items)?;
        write_atomic(&self.path, &content)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    pub fn set_item(&self, key: &str, value: impl Into<String>) -> Result<()> {
        let mut items = self.items.lock();
        items.insert(key.to_string(), value.into());
        self.flush(&items)
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock();
        if items.remove(key).is_some() {
            self.flush(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = LocalStorage::open(dir.path().join(STORAGE_FILE));

        assert_eq!(storage.get_item("selectedArtworks"), None);
        storage.set_item("selectedArtworks", "{}").expect("set");
        assert_eq!(storage.get_item("selectedArtworks").as_deref(), Some("{}"));

        storage.remove_item("selectedArtworks").expect("remove");
        assert_eq!(storage.get_item("selectedArtworks"), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(STORAGE_FILE);

        LocalStorage::open(&path).set_item("k", "v").expect("set");

        let reopened = LocalStorage::open(&path);
        assert_eq!(reopened.get_item("k").as_deref(), Some("v"));
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(STORAGE_FILE);
        fs::write(&path, "{not json").expect("write");

        let storage = LocalStorage::open(&path);
        assert_eq!(storage.get_item("k"), None);

        storage.set_item("k", "v").expect("set");
        assert_eq!(LocalStorage::open(&path).get_item("k").as_deref(), Some("v"));
    }
}
