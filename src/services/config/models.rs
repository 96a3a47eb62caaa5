use crate::services::game::registry::Hive;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single registry value: hive, key path and value name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistryLocation {
    pub hive: Hive,
    pub key: String,
    pub value: String,
}

impl RegistryLocation {
    pub fn new(hive: Hive, key: &str, value: &str) -> Self {
        Self {
            hive,
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for RegistryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\\{}\\{}", self.hive.as_str(), self.key, self.value)
    }
}

pub const VENDOR_KEY: &str = "SOFTWARE\\SmiteWorks\\Fantasy Grounds";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SupportConfig {
    pub game_id: String,
    pub steam_app_id: String,
    /// Machine-scope install directory.
    pub app_dir: RegistryLocation,
    /// User-scope data directory.
    pub data_dir: RegistryLocation,
    /// Relative to the per-user application-data root.
    pub data_dir_fallback: PathBuf,
    /// Suffix the host appends to a mod's staging folder while it installs.
    pub installing_suffix: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            game_id: crate::GAME_ID.into(),
            steam_app_id: crate::STEAMAPP_ID.into(),
            app_dir: RegistryLocation::new(Hive::LocalMachine, VENDOR_KEY, "AppDir"),
            data_dir: RegistryLocation::new(Hive::CurrentUser, VENDOR_KEY, "DataDir"),
            data_dir_fallback: PathBuf::from("SmiteWorks").join("Fantasy Grounds"),
            installing_suffix: ".installing".into(),
        }
    }
}
