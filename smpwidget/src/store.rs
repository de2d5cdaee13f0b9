//! Persisted flag storage
//!
//! The consent flag must survive restarts and is shared by every widget
//! instance in the process. The controller therefore never touches an
//! ambient global: it is handed a [`KeyValueStore`] at construction,
//! reads the flag once, and writes it back when consent is granted.
//!
//! Two implementations ship with the crate: [`MemoryStore`] for tests
//! and embedders with their own persistence, and [`FileStore`] for a
//! durable YAML-backed flag file.

use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key of the shared consent flag
pub const CONSENT_KEY: &str = "sm_embed_ok";

/// Value stored once consent was granted; anything else means unconsented
pub const CONSENT_GRANTED: &str = "1";

/// Minimal string key-value store
///
/// The widget only ever writes the literal consent value, so writes are
/// idempotent and implementations need no coordination beyond
/// `Send + Sync`. One store is typically shared by every widget
/// instance.
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Check the consent flag in a store
pub fn consent_granted(store: &dyn KeyValueStore) -> bool {
    store.get(CONSENT_KEY).as_deref() == Some(CONSENT_GRANTED)
}

/// Persist the consent flag in a store
pub fn record_consent(store: &dyn KeyValueStore) -> Result<()> {
    store.set(CONSENT_KEY, CONSENT_GRANTED)
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory key-value store
///
/// Starts empty, so a fresh instance always reports no consent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// File-backed key-value store
///
/// Persists the flags as a YAML mapping at a caller-supplied path. The
/// file is read once at [`open`](Self::open) and rewritten on every
/// write; a missing file starts the store empty.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store backed by `path`, loading the file when it exists
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_yaml::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let yaml = serde_yaml::to_string(entries)?;
        std::fs::write(&self.path, yaml)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_fresh_store_reports_no_consent() {
        let store = MemoryStore::new();
        assert!(!consent_granted(&store));
    }

    #[test]
    fn test_record_consent_writes_the_flag() {
        let store = MemoryStore::new();
        record_consent(&store).unwrap();
        assert!(consent_granted(&store));
        assert_eq!(store.get(CONSENT_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_only_the_exact_granted_value_counts() {
        let store = MemoryStore::new();
        store.set(CONSENT_KEY, "yes").unwrap();
        assert!(!consent_granted(&store));
        store.set(CONSENT_KEY, "1").unwrap();
        assert!(consent_granted(&store));
    }
}
