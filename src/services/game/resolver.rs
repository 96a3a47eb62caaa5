//! Locates the game install and its mod-data folder.
//!
//! Both lookups are fallback chains: the registry first, then the store helper
//! (install path) or the per-user application-data folder (mod-data path).

use super::registry::RegistryReader;
use super::store::StoreLookup;
use super::validator;
use crate::services::config::{RegistryLocation, SupportConfig};
use crate::services::installer::kinds::ModPackageKind;
use crate::types::errors::{PluginError, PluginResult};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub struct PathResolver {
    config: Arc<SupportConfig>,
    registry: Arc<dyn RegistryReader>,
    store: Arc<dyn StoreLookup>,
    app_data_root: PathBuf,
    mod_data_path: OnceCell<PathBuf>,
}

/// Per-user roaming application-data directory (`%APPDATA%` on Windows).
pub fn default_app_data_root() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl PathResolver {
    pub fn new(
        config: Arc<SupportConfig>,
        registry: Arc<dyn RegistryReader>,
        store: Arc<dyn StoreLookup>,
    ) -> Self {
        Self {
            config,
            registry,
            store,
            app_data_root: default_app_data_root(),
            mod_data_path: OnceCell::new(),
        }
    }

    /// Override the per-user application-data root used by the fallback.
    pub fn with_app_data_root(mut self, root: PathBuf) -> Self {
        self.app_data_root = root;
        self
    }

    pub fn config(&self) -> &SupportConfig {
        &self.config
    }

    /// Read a registry value, treating empty strings and read errors as absent.
    fn read_registry(&self, location: &RegistryLocation) -> Option<String> {
        match self
            .registry
            .read_string(location.hive, &location.key, &location.value)
        {
            Ok(Some(value)) if !value.trim().is_empty() => Some(value),
            Ok(_) => {
                log::debug!("{}", PluginError::RegistryKeyMissing(location.to_string()));
                None
            }
            Err(e) => {
                log::warn!("Registry read failed for {location}: {e}");
                None
            }
        }
    }

    /// Game install directory: registry `AppDir`, then the store helper.
    pub async fn find_game_install_path(&self) -> PluginResult<PathBuf> {
        if let Some(value) = self.read_registry(&self.config.app_dir) {
            let path = PathBuf::from(value);
            let candidate = path.clone();
            match tokio::task::spawn_blocking(move || {
                validator::validate_install_path(&candidate)
            })
            .await
            {
                Ok(Ok(())) => {}
                Ok(Err(e)) => log::warn!("Registry install path may be stale: {e}"),
                Err(e) => log::warn!("Install path check did not finish: {e}"),
            }
            log::info!("Game found via registry: {}", path.display());
            return Ok(path);
        }

        log::warn!(
            "No install path in registry, asking store for app {}",
            self.config.steam_app_id
        );
        let app_ids = [self.config.steam_app_id.clone()];
        let game = self.store.find_by_app_id(&app_ids).await.map_err(|e| match e {
            PluginError::StoreLookup(_) => e,
            other => PluginError::StoreLookup(other.to_string()),
        })?;

        match game {
            Some(game) => {
                log::info!("Game found via {}: {}", game.store, game.game_path.display());
                Ok(game.game_path)
            }
            None => Err(PluginError::NotFound(format!(
                "{} is not installed (app id {})",
                self.config.game_id, self.config.steam_app_id
            ))),
        }
    }

    /// Mod-data root: registry `DataDir`, else the per-user default. Resolved once.
    pub async fn find_mod_data_path(&self) -> PathBuf {
        self.mod_data_path
            .get_or_init(|| async {
                match self.read_registry(&self.config.data_dir) {
                    Some(value) => PathBuf::from(value),
                    None => {
                        let fallback = self.app_data_root.join(&self.config.data_dir_fallback);
                        log::warn!(
                            "No data directory in registry, using {}",
                            fallback.display()
                        );
                        fallback
                    }
                }
            })
            .await
            .clone()
    }

    /// Create the mod-data root and its kind folders. Safe to call repeatedly.
    pub async fn prepare_directories(&self) -> PluginResult<PathBuf> {
        let root = self.find_mod_data_path().await;
        for folder in ModPackageKind::folders() {
            tokio::fs::create_dir_all(root.join(folder)).await?;
        }
        log::debug!("Mod-data directories ready under {}", root.display());
        Ok(root)
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
