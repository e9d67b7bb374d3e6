//! Persisted display settings.
//!
//! A flat string key-value map stored as JSON. Loading a missing file yields
//! the defaults; nothing is written until `save` is called.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use straylight_render::Theme;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Theme(#[from] straylight_render::ThemeError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut values = BTreeMap::new();
        values.insert(THEME_KEY.to_string(), Theme::default().to_string());
        Self { values }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when it does not exist.
    /// Keys missing from the file keep their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(settings);
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let stored: Settings = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        settings.values.extend(stored.values);

        tracing::debug!("Loaded {} settings from {}", settings.values.len(), path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, json + "\n").map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The stored theme. An unrecognised value is an error rather than a silent default.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        match self.get(THEME_KEY) {
            Some(name) => Ok(name.parse()?),
            None => Ok(Theme::default()),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set(THEME_KEY, theme.as_str());
    }
}
