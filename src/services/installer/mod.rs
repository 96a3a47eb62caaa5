//! Installers for Fantasy Grounds content archives.
//!
//! One [`KindInstaller`] per [`ModPackageKind`]; the host tries them in
//! priority order and uses the first that reports support.

pub mod classifier;
pub mod kinds;
pub mod planner;

pub use kinds::ModPackageKind;

use crate::host::{InstallerRegistration, ModInstaller};
use crate::services::config::SupportConfig;
use crate::types::errors::{PluginError, PluginResult};
use crate::types::models::{ArchiveEntry, InstallResult, SupportedResult};
use std::path::Path;
use std::sync::Arc;

pub struct KindInstaller {
    kind: ModPackageKind,
    config: Arc<SupportConfig>,
}

impl KindInstaller {
    pub fn new(kind: ModPackageKind, config: Arc<SupportConfig>) -> Self {
        Self { kind, config }
    }

    pub fn kind(&self) -> ModPackageKind {
        self.kind
    }

    /// Wrap into the registration the host expects.
    pub fn registration(
        kind: ModPackageKind,
        config: Arc<SupportConfig>,
    ) -> InstallerRegistration {
        InstallerRegistration {
            id: kind.installer_id().to_string(),
            priority: kind.priority(),
            installer: Arc::new(Self::new(kind, config)),
        }
    }
}

impl ModInstaller for KindInstaller {
    fn test_supported(&self, files: &[ArchiveEntry], game_id: &str) -> SupportedResult {
        classifier::test_supported(self.kind, files, game_id, &self.config.game_id)
    }

    fn install(
        &self,
        files: &[ArchiveEntry],
        destination_path: &Path,
    ) -> PluginResult<InstallResult> {
        let mod_name = if self.kind.is_loose() {
            let folder = destination_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    PluginError::InvalidInstruction(format!(
                        "destination {} has no folder name",
                        destination_path.display()
                    ))
                })?;
            let name = self.config.mod_name_from(&folder);
            if name.is_empty() {
                return Err(PluginError::InvalidInstruction(format!(
                    "destination {} has an empty mod name",
                    destination_path.display()
                )));
            }
            name
        } else {
            String::new()
        };

        planner::plan(self.kind, files, &mod_name)
    }
}

#[cfg(test)]
#[path = "tests/installer_tests.rs"]
mod tests;
