use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::CoreError;

/// Storage port: a durable string-keyed store of JSON blobs.
///
/// Callers read and overwrite whole values; there are no partial updates.
/// Implementations decide where the bytes live (memory, files, a remote KV).
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// In-process store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
