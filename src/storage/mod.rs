use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Keys shared with the rest of the site; do not rename.
pub const FAVORITES_KEY: &str = "favoriteProperties";
pub const SAVED_SEARCHES_KEY: &str = "savedSearches";
/// Session display data owned by the page chrome; read-only here.
pub const USER_DATA_KEY: &str = "userData";

/// Durable key-value store with typed access.
///
/// The browse manager persists favorites and saved searches through this
/// trait so tests can substitute [`MemoryStore`].
pub trait KvStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>>;
    fn set_raw(&mut self, key: &str, value: String) -> Result<()>;

    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .with_context(|| format!("corrupt record under key {key}"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string_pretty(value)
            .with_context(|| format!("failed to serialize record for key {key}"))?;
        self.set_raw(key, raw)
    }
}

/// One JSON file per key under a directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create store directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(raw))
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

/// In-memory store for tests. Clones share the same map so a test can keep a
/// handle and inspect what a component persisted.
#[derive(Default, Clone)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: String) -> Result<()> {
        self.records.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}
