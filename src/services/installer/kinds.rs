use serde::{Deserialize, Serialize};

pub const EXTENSIONS_FOLDER: &str = "extensions";
pub const MODULES_FOLDER: &str = "modules";

/// How an archive marks itself as a given kind of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// A file with this exact name (ASCII case-insensitive) anywhere in the archive.
    FileName(&'static str),
    /// Any file with this extension (no dot, ASCII case-insensitive).
    Extension(&'static str),
}

/// The packaging conventions Fantasy Grounds content ships in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModPackageKind {
    /// Unpacked extension folder holding `extension.xml`.
    LooseExtension,
    /// Packed `.ext` file.
    BundledExtension,
    /// Unpacked module folder holding `definition.xml`.
    LooseModule,
    /// Packed `.mod` file.
    BundledModule,
}

impl ModPackageKind {
    /// In installer priority order.
    pub const ALL: [ModPackageKind; 4] = [
        ModPackageKind::LooseExtension,
        ModPackageKind::BundledExtension,
        ModPackageKind::LooseModule,
        ModPackageKind::BundledModule,
    ];

    pub fn matcher(&self) -> Matcher {
        match self {
            ModPackageKind::LooseExtension => Matcher::FileName("extension.xml"),
            ModPackageKind::BundledExtension => Matcher::Extension("ext"),
            ModPackageKind::LooseModule => Matcher::FileName("definition.xml"),
            ModPackageKind::BundledModule => Matcher::Extension("mod"),
        }
    }

    /// Folder under the mod-data root this kind installs into.
    pub fn folder(&self) -> &'static str {
        match self {
            ModPackageKind::LooseExtension | ModPackageKind::BundledExtension => EXTENSIONS_FOLDER,
            ModPackageKind::LooseModule | ModPackageKind::BundledModule => MODULES_FOLDER,
        }
    }

    pub fn is_loose(&self) -> bool {
        matches!(self.matcher(), Matcher::FileName(_))
    }

    pub fn installer_id(&self) -> &'static str {
        match self {
            ModPackageKind::LooseExtension => "fantasygroundsunity-loosemod",
            ModPackageKind::BundledExtension => "fantasygroundsunity-extfile",
            ModPackageKind::LooseModule => "fantasygroundsunity-loosemodule",
            ModPackageKind::BundledModule => "fantasygroundsunity-modfile",
        }
    }

    pub fn priority(&self) -> i32 {
        match self {
            ModPackageKind::LooseExtension => 25,
            ModPackageKind::BundledExtension => 26,
            ModPackageKind::LooseModule => 27,
            ModPackageKind::BundledModule => 28,
        }
    }

    /// Every folder any kind installs into, without duplicates.
    pub fn folders() -> [&'static str; 2] {
        [EXTENSIONS_FOLDER, MODULES_FOLDER]
    }
}
