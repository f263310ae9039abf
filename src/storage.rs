//! Key-value persistence for the chat client.
//!
//! The store is a flat key-value surface: file-backed on native platforms,
//! in-memory on wasm. Consumers go through [`StoragePort`] so tests can swap
//! in [`MemoryStore`].

use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[cfg(target_arch = "wasm32")]
use once_cell::sync::Lazy;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Get/set of serialized values under fixed keys. Reads report absence
/// uniformly: a missing key and an unreadable value look the same.
pub trait StoragePort: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ============================================
// Platform store
// ============================================

/// In-memory storage for wasm builds.
#[cfg(target_arch = "wasm32")]
static WASM_STORAGE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// The device-local store: one file per key under the platform data
/// directory on native targets, process memory on wasm.
#[derive(Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn storage_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("atupele");
    }
    PathBuf::from("cache")
}

#[cfg(not(target_arch = "wasm32"))]
impl StoragePort for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let file_path = storage_dir().join(format!("{}.json", sanitize_key(key)));
        fs::read_to_string(file_path).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let dir = storage_dir();
        fs::create_dir_all(&dir).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let file_path = dir.join(format!("{}.json", sanitize_key(key)));
        fs::write(file_path, value).map_err(|e| StorageError::WriteFailed(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl StoragePort for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = WASM_STORAGE.lock().ok()?;
        storage.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut storage = WASM_STORAGE
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Sanitize storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

// ============================================
// In-memory store
// ============================================

/// Process-local store backing the tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().ok()?;
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("atupeleMessages"), "atupeleMessages");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("/path/to/file.html"), "_path_to_file_html");
    }

    #[test]
    fn memory_store_set_and_get() {
        let store = MemoryStore::new();
        store.set("greeting", "hello").expect("Failed to set");
        assert_eq!(store.get("greeting"), Some("hello".to_string()));
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("key", "first").expect("Failed to set");
        store.set("key", "second").expect("Failed to set");
        assert_eq!(store.get("key"), Some("second".to_string()));
    }

    #[test]
    fn memory_store_get_nonexistent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nonexistent_key"), None);
    }
}
