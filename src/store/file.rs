//! File Store Module
//!
//! Persistent backend keeping one file per key under a root directory.
//! Values survive process restarts; durability beyond a completed write is
//! whatever the filesystem provides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::store::Backend;

// == File Store ==
/// Maps each key to the file at `root/<key>`.
///
/// Keys are interpreted as relative paths, so a key like `users/42` nests a
/// `users/` directory under the root. Callers must sanitize keys upstream;
/// this layer performs no traversal checks.
#[derive(Debug)]
pub struct FileStore {
    /// Root directory all keys resolve under
    root: PathBuf,
}

impl FileStore {
    // == Constructor ==
    /// Opens a FileStore rooted at `root`, creating the directory (and any
    /// missing parents) if needed.
    ///
    /// # Errors
    /// Fails with the i/o kind when the root cannot be created. Callers
    /// constructing a store at process startup should treat this as fatal.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(StoreError::Io)?;
        Ok(Self { root })
    }

    /// Returns the root directory this store resolves keys under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Backend for FileStore {
    fn get(&mut self, key: &str) -> Result<Vec<u8>> {
        match fs::read(self.key_path(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let path = self.key_path(key);
        // Slash-bearing keys land in nested directories created on demand.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Io)?;
        }
        fs::write(path, value).map_err(StoreError::Io)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_missing_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("data");

        let store = FileStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(store.root(), root);
    }

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("key1", b"value1".to_vec()).unwrap();

        assert_eq!(store.get("key1").unwrap(), b"value1");
        assert!(dir.path().join("key1").is_file());
    }

    #[test]
    fn test_get_missing() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let result = store.get("missing");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_set_overwrites_fully() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("key1", b"a much longer first value".to_vec()).unwrap();
        store.set("key1", b"short".to_vec()).unwrap();

        // Full overwrite, not an append or partial rewrite.
        assert_eq!(store.get("key1").unwrap(), b"short");
    }

    #[test]
    fn test_nested_key_creates_directories() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("users/42/profile", b"data".to_vec()).unwrap();

        assert!(dir.path().join("users").join("42").is_dir());
        assert_eq!(store.get("users/42/profile").unwrap(), b"data");
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("key1", b"value1".to_vec()).unwrap();
        store.delete("key1").unwrap();

        assert!(!dir.path().join("key1").exists());
        assert!(matches!(store.get("key1"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_missing() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let result = store.delete("missing");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_empty_value_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.set("empty", Vec::new()).unwrap();
        assert_eq!(store.get("empty").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_values_persist_across_reopen() {
        let dir = tempdir().unwrap();

        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("durable", b"still here".to_vec()).unwrap();
        }

        let mut reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("durable").unwrap(), b"still here");
    }

    #[test]
    fn test_binary_value_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let value: Vec<u8> = (0..=255).collect();
        store.set("binary", value.clone()).unwrap();

        assert_eq!(store.get("binary").unwrap(), value);
    }
}
