//! File-backed session storage
//!
//! The whole store is one JSON object on disk, rewritten on every change.
//! Suitable for a desktop or CLI host that must survive restarts.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::storage::KeyValueStorage;
use crate::error::{ClientError, ClientResult};

#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ClientResult<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ClientError::Storage(format!("{} is not a JSON object: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes =
            serde_json::to_vec_pretty(entries).map_err(|e| ClientError::Storage(e.to_string()))?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn update<F>(&self, change: F) -> ClientResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.load()?;
        if change(&mut entries) {
            self.save(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        self.update(|entries| entries.remove(key).is_some())
    }
}
