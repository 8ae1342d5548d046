//! Durable keyed store: a synchronous string-key to JSON-value store with
//! pluggable backends and fold-to-default read semantics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by store backends.
///
/// Callers that hold a default value are expected to fold these away at the
/// boundary (see [`Store::get_or`]); the variants exist so the failure path
/// stays explicit and testable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("stored value is not valid for its type: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous key/value backend contract.
///
/// Keys are short internal constants; values are JSON documents. A missing
/// key reads as `None`, never as an error.
pub trait KeyValueStore: Send + Sync {
    /// Raw JSON stored at `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `raw` at `key`, replacing any previous value.
    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend, used by tests and as the degraded no-persistence mode.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), raw.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// File-backed backend: one `<key>.json` file per key under a profile
/// directory. This is the analog of one browser profile's local storage.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Uses `dir` as the profile directory. The directory is created lazily
    /// on first write, so a read-only or missing directory still reads as
    /// empty.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Cheaply clonable typed facade over a [`KeyValueStore`] backend.
///
/// Reads and writes are read-after-write consistent within one `Store`
/// (and its clones); nothing is guaranteed across processes.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
}

impl Store {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store persisting under the given profile directory.
    #[must_use]
    pub fn json_file(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(JsonFileStore::new(dir)))
    }

    /// Store that lives only as long as this process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Typed read of the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the stored value does
    /// not deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Typed read that folds every failure into the caller-supplied default.
    ///
    /// A missing key, an unreadable backend, and a value whose shape no
    /// longer matches `T` all yield `default`; failures are surfaced only
    /// as a warning diagnostic.
    #[must_use]
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                log::warn!("reading stored value for {key:?} failed, using default: {err}");
                default
            }
        }
    }

    /// Serializes `value` and stores it at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, &raw)
    }

    /// Deletes the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend delete fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let store = Store::in_memory();
        store.set("counts", &vec![1u32, 2, 3]).unwrap();
        let back: Option<Vec<u32>> = store.get("counts").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = Store::in_memory();
        let value: Option<Vec<u32>> = store.get("absent").unwrap();
        assert_eq!(value, None);
        assert_eq!(store.get_or("absent", 7u32), 7);
    }

    #[test]
    fn malformed_value_folds_to_default() {
        let backend = Arc::new(MemoryStore::new());
        backend.write("broken", "{not json").unwrap();

        let store = Store::new(backend);
        let direct: Result<Option<Vec<u32>>, _> = store.get("broken");
        assert!(matches!(direct, Err(StorageError::Malformed(_))));
        assert_eq!(store.get_or("broken", 42u32), 42);
    }

    #[test]
    fn mismatched_shape_folds_to_default() {
        let store = Store::in_memory();
        store.set("entry", "a string, not a number").unwrap();
        assert_eq!(store.get_or("entry", 0u32), 0);
    }

    #[test]
    fn remove_makes_key_absent() {
        let store = Store::in_memory();
        store.set("entry", &1u32).unwrap();
        store.remove("entry").unwrap();
        let value: Option<u32> = store.get("entry").unwrap();
        assert_eq!(value, None);

        // Removing again is fine.
        store.remove("entry").unwrap();
    }

    #[test]
    fn clones_share_the_backend() {
        let store = Store::in_memory();
        let clone = store.clone();
        store.set("shared", &5u32).unwrap();
        assert_eq!(clone.get_or("shared", 0u32), 5);
    }

    /// Backend whose every operation fails, for exercising the fold path.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("backend offline".into()))
        }

        fn write(&self, _key: &str, _raw: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("backend offline".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("backend offline".into()))
        }
    }

    #[test]
    fn unavailable_backend_folds_to_default() {
        let store = Store::new(Arc::new(BrokenStore));
        assert_eq!(store.get_or("anything", 11u32), 11);
        assert!(store.set("anything", &1u32).is_err());
    }
}
