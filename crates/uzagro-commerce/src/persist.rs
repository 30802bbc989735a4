//! Best-effort persistence envelope shared by the state stores.
//!
//! Each store serializes its full payload after every successful mutation
//! and reads it back once at construction. The in-memory state is always
//! authoritative: a failed write or an unreadable blob degrades to a
//! non-persisted session, never to an error the caller sees.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uzagro_storage::Storage;

/// Version stamped into every persisted envelope. Envelopes carrying a
/// different version are discarded on load.
pub(crate) const STORAGE_VERSION: u32 = 0;

/// The on-disk document shape: `{ "state": ..., "version": 0 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Persisted<T> {
    pub state: T,
    pub version: u32,
}

/// Load the payload stored under `key`, or `None` when the store should
/// start empty (missing key, unreadable blob, unknown version).
pub(crate) fn load<T: DeserializeOwned>(storage: &Storage, key: &str) -> Option<T> {
    match storage.get::<Persisted<T>>(key) {
        Ok(Some(persisted)) if persisted.version == STORAGE_VERSION => Some(persisted.state),
        Ok(Some(persisted)) => {
            tracing::warn!(
                key,
                version = persisted.version,
                "discarding persisted state with unknown version"
            );
            None
        }
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(key, %error, "failed to read persisted state, starting empty");
            None
        }
    }
}

/// Write the payload under `key`. Failures are logged and swallowed.
pub(crate) fn save<T: Serialize>(storage: &Storage, key: &str, state: T) {
    let envelope = Persisted {
        state,
        version: STORAGE_VERSION,
    };
    if let Err(error) = storage.set(key, &envelope) {
        tracing::warn!(key, %error, "failed to persist state, in-memory state unaffected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uzagro_storage::{MemoryBackend, StorageBackend};

    #[test]
    fn test_save_load_round_trip() {
        let storage = Storage::memory();
        save(&storage, "k", vec![1u32, 2, 3]);

        let loaded: Option<Vec<u32>> = load(&storage, "k");
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_load_missing_key() {
        let storage = Storage::memory();
        let loaded: Option<Vec<u32>> = load(&storage, "missing");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_discards_unknown_version() {
        let backend = MemoryBackend::new();
        backend
            .write("k", br#"{"state":[1,2,3],"version":7}"#)
            .unwrap();

        let storage = Storage::from_memory(backend);
        let loaded: Option<Vec<u32>> = load(&storage, "k");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_tolerates_corrupt_blob() {
        let backend = MemoryBackend::new();
        backend.write("k", b"definitely not json").unwrap();

        let storage = Storage::from_memory(backend);
        let loaded: Option<Vec<u32>> = load(&storage, "k");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_envelope_shape() {
        let storage = Storage::memory();
        save(&storage, "k", vec!["x".to_string()]);

        let raw: serde_json::Value = storage.get("k").unwrap().unwrap();
        assert_eq!(raw["version"], 0);
        assert_eq!(raw["state"][0], "x");
    }
}
