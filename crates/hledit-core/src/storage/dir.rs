//! Directory-backed store: one text file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::traits::KeyValueStore;
use super::types::StoreKey;
use crate::error::{Error, Result};
use crate::fs::write_atomic;

/// Stores each key as `<dir>/<key>.txt`.
///
/// Values are written atomically and read back byte for byte. A missing
/// file is an absent value.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the directory cannot be created or
    /// `root` exists and is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            Error::Storage(format!(
                "Failed to create store directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: StoreKey) -> PathBuf {
        self.root.join(format!("{}.txt", key.as_str()))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: StoreKey) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: StoreKey, value: &str) -> Result<()> {
        let path = self.path_for(key);
        write_atomic(&path, value).map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(key = %key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("store");

        let store = DirStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        assert_eq!(store.get(StoreKey::LedgerText).unwrap(), None);
    }

    #[test]
    fn test_values_round_trip_verbatim() {
        let dir = tempdir().unwrap();
        let mut store = DirStore::open(dir.path()).unwrap();
        let text = "2024-01-01 a\r\n    x  $1.00\r\n\n\n";

        store.set(StoreKey::LedgerText, text).unwrap();
        assert_eq!(store.get(StoreKey::LedgerText).unwrap().as_deref(), Some(text));
        assert_eq!(
            fs::read_to_string(dir.path().join("hledger-input.txt")).unwrap(),
            text
        );
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let mut store = DirStore::open(dir.path()).unwrap();

        store.set(StoreKey::HighlightedAccount, "expenses:uncat").unwrap();
        store.remove(StoreKey::HighlightedAccount).unwrap();
        store.remove(StoreKey::HighlightedAccount).unwrap();
        assert_eq!(store.get(StoreKey::HighlightedAccount).unwrap(), None);
    }

    #[test]
    fn test_open_on_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        assert!(matches!(DirStore::open(&file), Err(Error::Storage(_))));
    }
}
