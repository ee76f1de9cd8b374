use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::KeyValueStore;

/// Raw values that mean "nothing here". They show up when an absent value
/// was serialized by a careless writer.
const SENTINELS: &[&str] = &["", "undefined", "null"];

/// No-fail adapter over a [`KeyValueStore`].
///
/// None of its operations return an error. Failures are logged at `warn` and
/// reported as absence (reads) or ignored (writes). A stored value that cannot
/// be decoded is deleted on first read so the same failure does not repeat.
#[derive(Clone)]
pub struct SafeStorage {
    backend: Arc<dyn KeyValueStore>,
}

impl SafeStorage {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read and decode a JSON value.
    ///
    /// `None` when the key is missing, holds a sentinel (`""`, `"undefined"`,
    /// `"null"`), or does not decode as `T`. Sentinels and undecodable values
    /// are removed from the backend.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;

        if SENTINELS.contains(&raw.trim()) {
            tracing::debug!(key, "Removing empty sentinel value from storage");
            self.remove(key);
            return None;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Invalid JSON in storage, removing key");
                self.remove(key);
                None
            }
        }
    }

    /// Encode `value` as JSON and store it. On failure the previous value is
    /// left in place.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_string(key, &raw),
            Err(e) => {
                tracing::warn!(key, error = %e, "Could not serialize value for storage");
            }
        }
    }

    /// Raw read, no decoding and no sentinel handling.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.read(key)
    }

    /// Raw best-effort write.
    pub fn set_string(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            tracing::warn!(key, error = %e, "Storage write failed");
        }
    }

    /// Best-effort delete.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            tracing::warn!(key, error = %e, "Storage remove failed");
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for SafeStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeStorage").finish_non_exhaustive()
    }
}
