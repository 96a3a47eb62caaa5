use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Archive-relative file path as reported by the host. Either separator may appear;
/// a trailing separator marks a directory entry.
pub type ArchiveEntry = String;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstructionType {
    Copy,
}

/// One file-copy step for the host's install engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CopyDirective {
    #[serde(rename = "type")]
    pub kind: InstructionType,
    /// Archive entry, verbatim.
    pub source: String,
    /// Relative to the mod-data root.
    pub destination: PathBuf,
}

impl CopyDirective {
    pub fn copy(source: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            kind: InstructionType::Copy,
            source: source.into(),
            destination: destination.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallResult {
    pub instructions: Vec<CopyDirective>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportedResult {
    pub supported: bool,
    pub required_files: Vec<String>,
}

impl SupportedResult {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            required_files: Vec::new(),
        }
    }
}

/// Static game metadata handed to the host once at registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameDescriptor {
    pub id: String,
    pub name: String,
    pub merge_mods: bool,
    pub logo: String,
    pub executable: String,
    pub required_files: Vec<String>,
    pub supported_tools: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub details: BTreeMap<String, String>,
}
