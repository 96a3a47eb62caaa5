use crate::types::errors::{PluginError, PluginResult};
use std::path::{Component, Path, PathBuf};

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Archive listings mark directories with a trailing separator.
pub fn is_directory_entry(entry: &str) -> bool {
    entry.ends_with(SEPARATORS)
}

fn has_drive_prefix(entry: &str) -> bool {
    let bytes = entry.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Splits an archive entry into segments, resolving `.` and `..` lexically.
///
/// Returns `None` for absolute entries and for entries that climb above the
/// archive root, so callers can drop them.
pub fn entry_segments(entry: &str) -> Option<Vec<&str>> {
    if entry.starts_with(SEPARATORS) || has_drive_prefix(entry) {
        return None;
    }

    let mut segments = Vec::new();
    for part in entry.split(SEPARATORS) {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            name => segments.push(name),
        }
    }
    Some(segments)
}

/// Last path segment, whichever separator the archive uses.
pub fn entry_file_name(entry: &str) -> Option<&str> {
    entry.split(SEPARATORS).filter(|s| !s.is_empty()).last()
}

/// Joins `relative` onto `base`, refusing anything that would land outside `base`.
pub fn resolve_inside(base: &Path, relative: &Path) -> PluginResult<PathBuf> {
    let mut depth: usize = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    PluginError::InvalidInstruction(format!(
                        "{} escapes {}",
                        relative.display(),
                        base.display()
                    ))
                })?;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(PluginError::InvalidInstruction(format!(
                    "{} is not relative",
                    relative.display()
                )));
            }
        }
    }

    Ok(base.join(relative))
}
