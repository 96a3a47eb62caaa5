//! Fantasy Grounds Unity support for mod manager hosts.
//!
//! The host calls [`registration::main`] once at load time. Everything else is
//! reached through the game and installer registrations it receives.

pub mod host;
pub mod registration;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

/// Nexus Mods domain of the game. Installers only accept archives for this id.
pub const GAME_ID: &str = "fantasygroundsunity";

/// Steam application id, used for the store fallback and the environment block.
pub const STEAMAPP_ID: &str = "1196310";

pub use registration::{main, register};
