//! Type-safe key-value persistence for UzAgro client state.
//!
//! Provides a simple, ergonomic API for persisting client-side state as JSON
//! documents under named keys, with pluggable byte-level backends (in-memory
//! and on-disk).
//!
//! # Example
//!
//! ```rust,ignore
//! use uzagro_storage::Storage;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct CartSnapshot {
//!     items: Vec<CartItem>,
//! }
//!
//! let storage = Storage::open_dir(state_dir)?;
//!
//! // Store a value
//! storage.set("uzagro-cart-storage", &snapshot)?;
//!
//! // Retrieve a value
//! let snapshot: Option<CartSnapshot> = storage.get("uzagro-cart-storage")?;
//!
//! // Delete a value
//! storage.delete("uzagro-cart-storage")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use kv::Storage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileBackend, MemoryBackend, Storage, StorageBackend, StorageError};
}
