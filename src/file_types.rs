//! Manifest file type detection
//!
//! Maps a manifest path to the format variant that handles it.

use std::path::Path;

/// Supported manifest formats.
///
/// Each variant corresponds to one manifest syntax and determines which
/// parser variant and registry client handle the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// pyproject.toml style dependency tables
    Pyproject,
    /// requirements.txt style constraint lines
    Requirements,
    /// pubspec.yaml style package maps
    Pubspec,
}

impl ManifestKind {
    /// Detect the manifest format from a file path.
    ///
    /// Extensions are checked in fixed priority: `.toml`, then `.txt`, then
    /// `.yml`/`.yaml`. Returns `None` when nothing matches.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.to_str().unwrap_or_default();
        if name.ends_with(".toml") {
            Some(ManifestKind::Pyproject)
        } else if name.ends_with(".txt") {
            Some(ManifestKind::Requirements)
        } else if name.ends_with(".yml") || name.ends_with(".yaml") {
            Some(ManifestKind::Pubspec)
        } else {
            None
        }
    }
}
