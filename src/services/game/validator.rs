use super::descriptor::REQUIRED_FILES;
use crate::types::errors::{PluginError, PluginResult};
use std::path::Path;

/// Validates a folder as a Fantasy Grounds Unity install.
///
/// Every file in [`REQUIRED_FILES`] must exist directly inside `path`.
pub fn validate_install_path(path: &Path) -> PluginResult<()> {
    if !path.is_dir() {
        return Err(PluginError::NotFound(format!(
            "Path does not exist: {}",
            path.display()
        )));
    }

    let missing: Vec<&str> = REQUIRED_FILES
        .iter()
        .copied()
        .filter(|name| !path.join(name).is_file())
        .collect();

    if !missing.is_empty() {
        return Err(PluginError::NotFound(format!(
            "Missing required files in {}: {}",
            path.display(),
            missing.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
