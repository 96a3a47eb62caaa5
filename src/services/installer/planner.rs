//! Maps a classified archive listing onto copy directives.
//!
//! Loose kinds keep the folder that holds the marker and install under
//! `<folder>/<mod name>/`. Bundled kinds drop every file matching the bundle
//! extension flat into `<folder>/`. Input order is preserved.

use super::classifier::entry_matches;
use super::kinds::{Matcher, ModPackageKind};
use crate::services::fs_utils::path_utils::{entry_file_name, entry_segments, is_directory_entry};
use crate::types::errors::{PluginError, PluginResult};
use crate::types::models::{ArchiveEntry, CopyDirective, InstallResult};
use std::path::{Path, PathBuf};

/// Plan directives for `kind`. `mod_name` is only used by loose kinds.
pub fn plan(
    kind: ModPackageKind,
    files: &[ArchiveEntry],
    mod_name: &str,
) -> PluginResult<InstallResult> {
    let instructions = match kind.matcher() {
        Matcher::FileName(marker) => plan_loose(files, marker, kind.folder(), mod_name)?,
        Matcher::Extension(ext) => plan_bundle(files, ext, kind.folder()),
    };
    log::debug!(
        "{}: {} instruction(s) from {} file(s)",
        kind.installer_id(),
        instructions.len(),
        files.len()
    );
    Ok(InstallResult { instructions })
}

/// Folder-style content: everything under the marker's directory.
pub fn plan_loose(
    files: &[ArchiveEntry],
    marker: &'static str,
    folder: &str,
    mod_name: &str,
) -> PluginResult<Vec<CopyDirective>> {
    let marker_segments = files
        .iter()
        .filter(|f| entry_matches(Matcher::FileName(marker), f))
        .find_map(|f| entry_segments(f))
        .ok_or_else(|| PluginError::MissingMarker(marker.to_string()))?;
    let root = &marker_segments[..marker_segments.len().saturating_sub(1)];
    let keep_from = root.len().saturating_sub(1);

    let base = Path::new(folder).join(mod_name);
    let mut instructions = Vec::new();
    for file in files {
        if is_directory_entry(file) {
            continue;
        }
        let Some(segments) = entry_segments(file) else {
            log::warn!("Skipping entry outside the archive root: {file}");
            continue;
        };
        if segments.len() <= root.len() || !segments.starts_with(root) {
            continue;
        }

        let destination: PathBuf = segments[keep_from..]
            .iter()
            .fold(base.clone(), |acc, part| acc.join(part));
        instructions.push(CopyDirective::copy(file.clone(), destination));
    }

    Ok(instructions)
}

/// Packed content: every file with the bundle extension, flattened.
pub fn plan_bundle(
    files: &[ArchiveEntry],
    ext: &'static str,
    folder: &str,
) -> Vec<CopyDirective> {
    files
        .iter()
        .filter(|f| entry_matches(Matcher::Extension(ext), f))
        .filter_map(|f| {
            entry_file_name(f)
                .map(|name| CopyDirective::copy(f.clone(), Path::new(folder).join(name)))
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/planner_tests.rs"]
mod tests;
