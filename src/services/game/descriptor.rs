use crate::services::config::SupportConfig;
use crate::types::models::GameDescriptor;
use std::collections::BTreeMap;

pub const GAME_NAME: &str = "Fantasy Grounds Unity";
pub const EXECUTABLE: &str = "FantasyGrounds.exe";
pub const REQUIRED_FILES: &[&str] = &["FantasyGrounds.exe", "FantasyGroundsUpdater.exe"];
pub const LOGO: &str = "gameart.jpg";

/// Build the descriptor handed to the host at registration.
pub fn game_descriptor(config: &SupportConfig) -> GameDescriptor {
    let mut environment = BTreeMap::new();
    environment.insert("SteamAPPId".to_string(), config.steam_app_id.clone());

    let mut details = BTreeMap::new();
    details.insert("steamAppId".to_string(), config.steam_app_id.clone());

    GameDescriptor {
        id: config.game_id.clone(),
        name: GAME_NAME.into(),
        merge_mods: false,
        logo: LOGO.into(),
        executable: EXECUTABLE.into(),
        required_files: REQUIRED_FILES.iter().map(|f| f.to_string()).collect(),
        supported_tools: Vec::new(),
        environment,
        details,
    }
}

#[cfg(test)]
#[path = "tests/descriptor_tests.rs"]
mod tests;
