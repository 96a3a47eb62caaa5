//! Decides whether an archive listing matches a packaging kind.

use super::kinds::{Matcher, ModPackageKind};
use crate::services::fs_utils::path_utils::{entry_file_name, entry_segments, is_directory_entry};
use crate::types::models::{ArchiveEntry, SupportedResult};
use std::path::Path;

/// Whether a single entry satisfies `matcher`. Directory entries and entries
/// outside the archive root never do.
pub fn entry_matches(matcher: Matcher, entry: &str) -> bool {
    if is_directory_entry(entry) || entry_segments(entry).is_none() {
        return false;
    }
    let Some(name) = entry_file_name(entry) else {
        return false;
    };

    match matcher {
        Matcher::FileName(marker) => name.eq_ignore_ascii_case(marker),
        Matcher::Extension(ext) => Path::new(name)
            .extension()
            .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext)),
    }
}

/// Whether any entry in `files` satisfies the kind's matcher.
pub fn contains_kind(kind: ModPackageKind, files: &[ArchiveEntry]) -> bool {
    let matcher = kind.matcher();
    files.iter().any(|f| entry_matches(matcher, f))
}

/// The host's support test: right game, and the kind's marker is present.
pub fn test_supported(
    kind: ModPackageKind,
    files: &[ArchiveEntry],
    game_id: &str,
    expected_game_id: &str,
) -> SupportedResult {
    let supported = game_id == expected_game_id && contains_kind(kind, files);
    log::debug!(
        "{}: {} for {} file(s) of game {game_id}",
        kind.installer_id(),
        if supported { "supported" } else { "unsupported" },
        files.len()
    );
    SupportedResult::new(supported)
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
