use preference_store::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// When the persisted theme is applied relative to the first frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceLoad {
    #[default]
    Eager,
    Deferred,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesConfig {
    #[serde(flatten)]
    pub store: StoreConfig,
    #[serde(default)]
    pub load: PreferenceLoad,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

impl TodoConfig {
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(data)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// A missing file yields the defaults. Malformed files are still errors.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load_from_file(path) {
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at '{}', using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}
