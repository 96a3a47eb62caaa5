use fgu_support::host::{ExtensionContext, InstallerRegistration, RegisteredGame};
use fgu_support::services::game::registry::{Hive, RegistryReader};
use fgu_support::services::game::store::{NoStore, StoreLookup};
use fgu_support::types::errors::PluginResult;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[derive(Default)]
pub struct MapRegistry {
    pub values: HashMap<(Hive, String), String>,
}

impl RegistryReader for MapRegistry {
    fn read_string(&self, hive: Hive, _key: &str, value: &str) -> PluginResult<Option<String>> {
        Ok(self.values.get(&(hive, value.to_string())).cloned())
    }
}

/// Minimal host: keeps registrations and picks installers the way the real host does.
pub struct TestHost {
    registry: Arc<MapRegistry>,
    pub game: Option<RegisteredGame>,
    pub installers: Vec<InstallerRegistration>,
}

impl TestHost {
    pub fn new(registry: MapRegistry) -> Self {
        init_logging();
        Self {
            registry: Arc::new(registry),
            game: None,
            installers: Vec::new(),
        }
    }

    /// First installer by ascending priority that supports `files`.
    pub fn pick_installer(&self, files: &[String], game_id: &str) -> Option<&InstallerRegistration> {
        let mut ordered: Vec<&InstallerRegistration> = self.installers.iter().collect();
        ordered.sort_by_key(|r| r.priority);
        ordered
            .into_iter()
            .find(|r| r.installer.test_supported(files, game_id).supported)
    }
}

impl ExtensionContext for TestHost {
    fn register_game(&mut self, game: RegisteredGame) -> PluginResult<()> {
        self.game = Some(game);
        Ok(())
    }

    fn register_installer(&mut self, registration: InstallerRegistration) -> PluginResult<()> {
        self.installers.push(registration);
        Ok(())
    }

    fn registry(&self) -> Arc<dyn RegistryReader> {
        self.registry.clone()
    }

    fn store(&self) -> Arc<dyn StoreLookup> {
        Arc::new(NoStore)
    }

    fn config_path(&self) -> Option<PathBuf> {
        None
    }
}
