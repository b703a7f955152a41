//! Key-value persistence for saved splits.
//!
//! Last write wins. Entries never expire and carry no version; a corrupt entry
//! reads back as absent.

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, RwLock},
};

use crate::{errors::StoreError, state::SplitConfiguration};

pub trait SplitStore: Send + Sync {
    fn get(&self, key: &str) -> Option<SplitConfiguration>;

    fn set(&self, key: &str, value: &SplitConfiguration) -> Result<(), StoreError>;
}

/// In-process store holding each split as a JSON string
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored under `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    /// Stores `json` under `key` without checking it
    pub fn set_raw(&self, key: &str, json: impl Into<String>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), json.into());
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SplitStore for MemoryStore {
    fn get(&self, key: &str) -> Option<SplitConfiguration> {
        let raw = self.raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to load split from store");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &SplitConfiguration) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, json);
        Ok(())
    }
}

/// Store backed by one JSON object file: `{ "<key>": <SplitConfiguration>, ... }`
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, serde_json::Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SplitStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<SplitConfiguration> {
        let entries = match self.read_all() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read split store"
                );
                return None;
            }
        };

        let value = entries.get(key)?.clone();
        match serde_json::from_value(value) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to load split from store");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &SplitConfiguration) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        // An unreadable file is replaced rather than blocking every save
        let mut entries = self.read_all().unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "discarding unreadable split store"
            );
            BTreeMap::new()
        });
        entries.insert(key.to_string(), serde_json::to_value(value)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
