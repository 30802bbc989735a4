//! Byte-level storage backends.
//!
//! A backend is the raw key-to-bytes layer underneath [`crate::Storage`].
//! Backends take `&self` and use interior mutability where needed, mirroring
//! the single-writer browser storage they stand in for.

use crate::StorageError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Raw key-value backend storing opaque byte blobs.
pub trait StorageBackend {
    /// Read the blob stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write `bytes` under `key`, replacing any previous blob.
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove the blob under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether `key` holds a blob.
    fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// List all keys currently holding a blob.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory backend.
///
/// Clones share the same underlying map, so a second handle built from a
/// clone observes everything written through the first. Tests use this to
/// simulate a reload against the same persisted blob.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::BackendError("lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.lock()?.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// File-backed backend keeping one JSON document per key.
///
/// Each key maps to `<root>/<key>.json`.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open (creating if necessary) the directory holding the blobs.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root).map_err(|e| StorageError::OpenError(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), bytes)
            .map_err(|e| StorageError::BackendError(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.path_for(key).is_file())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries =
            std::fs::read_dir(&self.root).map_err(|e| StorageError::BackendError(e.to_string()))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::BackendError(e.to_string()))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_write_read() {
        let backend = MemoryBackend::new();
        backend.write("a", b"hello").unwrap();

        assert_eq!(backend.read("a").unwrap(), Some(b"hello".to_vec()));
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_memory_remove() {
        let backend = MemoryBackend::new();
        backend.write("a", b"hello").unwrap();
        backend.remove("a").unwrap();

        assert_eq!(backend.read("a").unwrap(), None);
        // Removing an absent key is fine
        backend.remove("a").unwrap();
    }

    #[test]
    fn test_memory_exists_and_keys() {
        let backend = MemoryBackend::new();
        backend.write("a", b"1").unwrap();
        backend.write("b", b"2").unwrap();

        assert!(backend.exists("a").unwrap());
        assert!(!backend.exists("c").unwrap());

        let mut keys = backend.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_memory_clones_share_data() {
        let backend = MemoryBackend::new();
        let other = backend.clone();

        backend.write("shared", b"blob").unwrap();
        assert_eq!(other.read("shared").unwrap(), Some(b"blob".to_vec()));
    }

    #[test]
    fn test_file_write_read() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("cart", b"{\"items\":[]}").unwrap();
        assert_eq!(
            backend.read("cart").unwrap(),
            Some(b"{\"items\":[]}".to_vec())
        );
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_file_remove_and_exists() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("cart", b"x").unwrap();
        assert!(backend.exists("cart").unwrap());

        backend.remove("cart").unwrap();
        assert!(!backend.exists("cart").unwrap());

        // Removing an absent key is fine
        backend.remove("cart").unwrap();
    }

    #[test]
    fn test_file_keys() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.write("cart", b"1").unwrap();
        backend.write("compare", b"2").unwrap();

        let mut keys = backend.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["cart".to_string(), "compare".to_string()]);
    }

    #[test]
    fn test_file_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("storage");

        let backend = FileBackend::open(&nested).unwrap();
        backend.write("k", b"v").unwrap();

        assert!(nested.join("k.json").is_file());
    }
}
