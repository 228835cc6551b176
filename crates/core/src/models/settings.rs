use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::CoreError;

/// Default location of the saved-history document.
pub const DEFAULT_HISTORY_PATH: &str = "data/history.json";

/// User-configurable settings, read from an optional JSON settings file.
/// Every key is optional; missing keys fall back to [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where saved calculation histories are stored.
    pub history_path: PathBuf,

    /// Log filter used when `RUST_LOG` is not set (e.g., "info", "debug").
    pub log_level: String,

    /// Log output format: "pretty" or "json".
    pub log_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file on disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Load settings if a path is given, otherwise use defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_optional(path: Option<&Path>) -> Result<Self, CoreError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default()),
        }
    }
}
