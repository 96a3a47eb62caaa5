use super::path_utils::{entry_segments, resolve_inside};
use crate::types::errors::{PluginError, PluginResult};
use crate::types::models::CopyDirective;
use std::fs;
use std::path::{Path, PathBuf};

/// Executes copy directives the way the host's install engine does.
///
/// Sources are resolved against `staging_dir` (the extracted archive), destinations
/// against `mod_root`. Existing files are overwritten. Stops at the first failure.
/// Returns the number of files copied.
pub fn apply_instructions(
    staging_dir: &Path,
    mod_root: &Path,
    instructions: &[CopyDirective],
) -> PluginResult<usize> {
    let mut options = fs_extra::file::CopyOptions::new();
    options.overwrite = true;

    for directive in instructions {
        let source_rel: PathBuf = entry_segments(&directive.source)
            .ok_or_else(|| {
                PluginError::InvalidInstruction(format!("unsafe source {}", directive.source))
            })?
            .into_iter()
            .collect();
        let from = resolve_inside(staging_dir, &source_rel)?;
        let to = resolve_inside(mod_root, &directive.destination)?;

        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }

        fs_extra::file::copy(&from, &to, &options).map_err(|err| {
            PluginError::Io(format!("copy {} -> {}: {err}", from.display(), to.display()))
        })?;
        log::debug!("Copied {} -> {}", directive.source, to.display());
    }

    log::info!(
        "Applied {} instruction(s) into {}",
        instructions.len(),
        mod_root.display()
    );
    Ok(instructions.len())
}
