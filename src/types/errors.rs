use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Registry key missing: {0}")]
    RegistryKeyMissing(String),
    #[error("Marker file missing: {0}")]
    MissingMarker(String),
    #[error("Store lookup failed: {0}")]
    StoreLookup(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Registration failed: {0}")]
    Registration(String),
    #[error("Invalid instruction: {0}")]
    InvalidInstruction(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for PluginError {
    fn from(error: std::io::Error) -> Self {
        PluginError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(error: serde_json::Error) -> Self {
        PluginError::Config(error.to_string())
    }
}

impl Serialize for PluginError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
