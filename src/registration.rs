//! Plugin entry point.

use crate::host::{ExtensionContext, RegisteredGame};
use crate::services::config::SupportConfig;
use crate::services::game::{game_descriptor, PathResolver};
use crate::services::installer::{KindInstaller, ModPackageKind};
use crate::types::errors::PluginResult;
use std::sync::Arc;

/// Register the game and every installer with the host.
pub fn register(context: &mut dyn ExtensionContext) -> PluginResult<()> {
    let config = match context.config_path() {
        Some(path) => SupportConfig::load(&path)?,
        None => SupportConfig::default(),
    };
    let config = Arc::new(config);

    let descriptor = game_descriptor(&config);
    let resolver = PathResolver::new(config.clone(), context.registry(), context.store());
    context.register_game(RegisteredGame {
        descriptor,
        resolver: Arc::new(resolver),
    })?;

    for kind in ModPackageKind::ALL {
        context.register_installer(KindInstaller::registration(kind, config.clone()))?;
    }

    log::info!(
        "Registered {} with {} installers",
        config.game_id,
        ModPackageKind::ALL.len()
    );
    Ok(())
}

/// Host-facing entry point. `false` tells the host to disable the plugin.
pub fn main(context: &mut dyn ExtensionContext) -> bool {
    match register(context) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Fantasy Grounds Unity support failed to load: {e}");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/registration_tests.rs"]
mod tests;
