pub mod models;

pub use models::*;

use crate::types::errors::PluginResult;
use std::path::Path;

impl SupportConfig {
    /// Parse a JSON override. Fields left out keep their defaults.
    pub fn from_json_str(json: &str) -> PluginResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load overrides from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> PluginResult<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config = Self::from_json_str(&raw)?;
        log::info!("Loaded config overrides from {}", path.display());
        Ok(config)
    }

    /// Strip the host's in-progress suffix from a staging folder name.
    pub fn mod_name_from(&self, folder_name: &str) -> String {
        folder_name
            .strip_suffix(self.installing_suffix.as_str())
            .unwrap_or(folder_name)
            .to_string()
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
