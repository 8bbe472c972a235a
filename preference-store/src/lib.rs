use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    Memory,
    JsonFile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default, rename = "backend")]
    pub kind: StoreKind,
    /// Backing file for `StoreKind::JsonFile`. Ignored by the memory backend.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self::default()
    }

    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: StoreKind::JsonFile,
            path: Some(path.into()),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Synchronous string key-value medium backing persisted preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object of string values, rewritten in full on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// A missing file opens as an empty store. Unreadable or malformed files are errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values: BTreeMap<String, String> = match fs::read(&path) {
            Ok(data) => serde_json::from_slice(&data)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    /// Like `open`, but a corrupt file is discarded and replaced on the next write.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(err) => {
                log::warn!(
                    "Ignoring unreadable preference file '{}': {err}",
                    path.display()
                );
                Self {
                    path,
                    values: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(&self.values)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

pub struct StoreFactory;

impl StoreFactory {
    pub fn create(config: &StoreConfig) -> Box<dyn KeyValueStore> {
        match (config.kind, &config.path) {
            (StoreKind::Memory, _) => Box::new(MemoryStore::new()),
            (StoreKind::JsonFile, Some(path)) => Box::new(JsonFileStore::open_or_empty(path)),
            (StoreKind::JsonFile, None) => {
                log::warn!("json_file preference backend has no path, using memory");
                Box::new(MemoryStore::new())
            }
        }
    }
}
