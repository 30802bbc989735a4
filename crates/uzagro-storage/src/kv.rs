//! Typed storage facade with automatic serialization.

use crate::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::path::Path;

/// Type-safe store over a pluggable byte backend.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
pub struct Storage {
    backend: Box<dyn StorageBackend>,
}

impl Storage {
    /// Wrap an arbitrary backend.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Open a fresh in-memory store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let storage = Storage::memory();
    /// ```
    pub fn memory() -> Self {
        Self::with_backend(Box::new(MemoryBackend::new()))
    }

    /// Wrap an existing in-memory backend.
    ///
    /// Because [`MemoryBackend`] clones share data, this lets two `Storage`
    /// handles observe the same blobs.
    pub fn from_memory(backend: MemoryBackend) -> Self {
        Self::with_backend(Box::new(backend))
    }

    /// Open a file-backed store rooted at `path`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let storage = Storage::open_dir("~/.local/share/uzagro")?;
    /// ```
    pub fn open_dir(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Ok(Self::with_backend(Box::new(FileBackend::open(path)?)))
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<CartSnapshot> = storage.get("uzagro-cart-storage")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.read(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// storage.set("uzagro-cart-storage", &snapshot)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.write(key, &bytes)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.backend.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.backend.keys()
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
