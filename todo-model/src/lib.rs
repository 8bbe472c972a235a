use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque item identifier. Allocated by the list store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

pub const THEME_LIGHT: &str = "light";
pub const THEME_DARK: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => THEME_LIGHT,
            ThemeMode::Dark => THEME_DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Caption for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Light => "dark theme",
            ThemeMode::Dark => "light theme",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown theme mode '{0}', expected 'light' or 'dark'")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    // Exact match only: persisted values outside the domain are rejected, not normalized.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            THEME_LIGHT => Ok(ThemeMode::Light),
            THEME_DARK => Ok(ThemeMode::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}
