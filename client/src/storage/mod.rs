//! # Persistent Key-Value Storage
//!
//! Durable home of the session (`token` and `user`).
//!
//! ## Layers
//!
//! ```text
//! SafeStorage          never fails: corrupt or sentinel values are deleted
//!     │                and reported as absent, write failures are logged
//!     ▼
//! dyn KeyValueStore    fallible backend returning Result<_, StorageError>
//!     ├── MemoryStore  process-local map (tests, ephemeral sessions)
//!     └── FileStore    JSON file on disk (survives restarts)
//! ```
//!
//! Values are plain strings. JSON encoding happens in [`SafeStorage`], so a
//! backend never needs to know what it stores.

mod file;
mod memory;
mod safe;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use safe::SafeStorage;

use crate::core::error::StorageError;

/// A persistent string-to-string store.
///
/// Implementations serialize their own access; callers may share one
/// instance across threads.
pub trait KeyValueStore: Send + Sync {
    /// Read a raw value. `Ok(None)` when the key does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
