//! The host side of the plugin contract.
//!
//! The host implements [`ExtensionContext`] and calls back into the
//! [`ModInstaller`]s and the [`PathResolver`] it is given at registration.

use crate::services::game::registry::RegistryReader;
use crate::services::game::store::StoreLookup;
use crate::services::game::PathResolver;
use crate::types::errors::PluginResult;
use crate::types::models::{ArchiveEntry, GameDescriptor, InstallResult, SupportedResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Per-archive installer operations.
pub trait ModInstaller: Send + Sync {
    /// Whether this installer can handle the archive listing `files` for `game_id`.
    fn test_supported(&self, files: &[ArchiveEntry], game_id: &str) -> SupportedResult;

    /// Copy directives for `files`. `destination_path` is the host's staging
    /// folder for the mod; its base name becomes the mod name.
    fn install(&self, files: &[ArchiveEntry], destination_path: &Path)
        -> PluginResult<InstallResult>;
}

pub struct RegisteredGame {
    pub descriptor: GameDescriptor,
    pub resolver: Arc<PathResolver>,
}

pub struct InstallerRegistration {
    pub id: String,
    /// Lower values are tried first.
    pub priority: i32,
    pub installer: Arc<dyn ModInstaller>,
}

pub trait ExtensionContext {
    fn register_game(&mut self, game: RegisteredGame) -> PluginResult<()>;

    fn register_installer(&mut self, registration: InstallerRegistration) -> PluginResult<()>;

    /// Registry bindings the resolver reads through.
    fn registry(&self) -> Arc<dyn RegistryReader>;

    /// Store helper used when the registry has no install path.
    fn store(&self) -> Arc<dyn StoreLookup>;

    /// Optional JSON file with config overrides.
    fn config_path(&self) -> Option<PathBuf> {
        None
    }
}
