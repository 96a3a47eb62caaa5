use crate::host::{ExtensionContext, InstallerRegistration, RegisteredGame};
use crate::services::game::registry::{Hive, RegistryReader};
use crate::services::game::store::{StoreGame, StoreLookup};
use crate::types::errors::{PluginError, PluginResult};
use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// In-memory registry. Values set to `Err` simulate a failed read.
#[derive(Default)]
pub struct FakeRegistry {
    values: HashMap<(Hive, String, String), Result<String, String>>,
}

impl FakeRegistry {
    pub fn with(mut self, hive: Hive, key: &str, value: &str, data: &str) -> Self {
        self.values
            .insert((hive, key.into(), value.into()), Ok(data.into()));
        self
    }

    pub fn failing(mut self, hive: Hive, key: &str, value: &str) -> Self {
        self.values
            .insert((hive, key.into(), value.into()), Err("access denied".into()));
        self
    }
}

impl RegistryReader for FakeRegistry {
    fn read_string(&self, hive: Hive, key: &str, value: &str) -> PluginResult<Option<String>> {
        match self.values.get(&(hive, key.to_string(), value.to_string())) {
            Some(Ok(data)) => Ok(Some(data.clone())),
            Some(Err(e)) => Err(PluginError::RegistryKeyMissing(e.clone())),
            None => Ok(None),
        }
    }
}

/// Store helper returning a canned answer and counting calls.
pub struct FakeStore {
    pub answer: Result<Option<StoreGame>, String>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeStore {
    pub fn found(path: &str) -> Self {
        Self::answering(Ok(Some(StoreGame {
            app_id: crate::STEAMAPP_ID.into(),
            game_path: PathBuf::from(path),
            store: "steam".into(),
        })))
    }

    pub fn empty() -> Self {
        Self::answering(Ok(None))
    }

    pub fn broken() -> Self {
        Self::answering(Err("steam not running".into()))
    }

    fn answering(answer: Result<Option<StoreGame>, String>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl StoreLookup for FakeStore {
    fn find_by_app_id<'a>(
        &'a self,
        app_ids: &'a [String],
    ) -> BoxFuture<'a, PluginResult<Option<StoreGame>>> {
        self.calls.lock().unwrap().push(app_ids.to_vec());
        let answer = self
            .answer
            .clone()
            .map_err(PluginError::StoreLookup);
        Box::pin(async move { answer })
    }
}

/// Host context that records what the plugin registers.
pub struct FakeHost {
    pub registry: Arc<FakeRegistry>,
    pub store: Arc<FakeStore>,
    pub config_path: Option<PathBuf>,
    pub games: Vec<RegisteredGame>,
    pub installers: Vec<InstallerRegistration>,
    /// Reject installer registrations once this many have been accepted.
    pub installer_limit: Option<usize>,
}

impl FakeHost {
    pub fn new(registry: FakeRegistry, store: FakeStore) -> Self {
        Self {
            registry: Arc::new(registry),
            store: Arc::new(store),
            config_path: None,
            games: Vec::new(),
            installers: Vec::new(),
            installer_limit: None,
        }
    }
}

impl ExtensionContext for FakeHost {
    fn register_game(&mut self, game: RegisteredGame) -> PluginResult<()> {
        self.games.push(game);
        Ok(())
    }

    fn register_installer(&mut self, registration: InstallerRegistration) -> PluginResult<()> {
        if self
            .installer_limit
            .is_some_and(|limit| self.installers.len() >= limit)
        {
            return Err(PluginError::Registration(format!(
                "installer {} rejected",
                registration.id
            )));
        }
        self.installers.push(registration);
        Ok(())
    }

    fn registry(&self) -> Arc<dyn RegistryReader> {
        self.registry.clone()
    }

    fn store(&self) -> Arc<dyn StoreLookup> {
        self.store.clone()
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config_path.clone()
    }
}
