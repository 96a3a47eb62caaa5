//! Game store lookup, provided by the host (Steam, GOG, ...).

use crate::types::errors::PluginResult;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoreGame {
    pub app_id: String,
    pub game_path: PathBuf,
    pub store: String,
}

pub trait StoreLookup: Send + Sync {
    /// Find an installed game by any of `app_ids`.
    ///
    /// `Ok(None)` when no store has the game installed; `Err` when the store
    /// helper itself could not be queried.
    fn find_by_app_id<'a>(
        &'a self,
        app_ids: &'a [String],
    ) -> BoxFuture<'a, PluginResult<Option<StoreGame>>>;
}

/// Store helper for hosts that have none.
pub struct NoStore;

impl StoreLookup for NoStore {
    fn find_by_app_id<'a>(
        &'a self,
        _app_ids: &'a [String],
    ) -> BoxFuture<'a, PluginResult<Option<StoreGame>>> {
        let found: PluginResult<Option<StoreGame>> = Ok(None);
        Box::pin(async move { found })
    }
}
