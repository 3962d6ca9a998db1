//! Parsers for dependency manifests (requirements.txt, pyproject.toml, pubspec.yaml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::file_types::ManifestKind;

/// One resolved package dependency from a manifest.
///
/// `name` always comes from the manifest. The remaining fields are
/// best-effort: `version` is the constraint as written in the source file
/// (possibly empty), and the metadata fields hold whatever the registry
/// returned, defaulting to the empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name as declared in the manifest
    pub name: String,
    /// Version constraint as written in the source file
    pub version: String,
    /// Short description from the registry
    pub description: String,
    /// License identifier from the registry
    pub license: String,
    /// Package homepage from the registry
    pub homepage: String,
}

impl Dependency {
    /// Build a record from a registry metadata bundle.
    ///
    /// Metadata lives under the payload's `info` object; anything the
    /// registry did not return stays empty.
    pub(crate) fn from_registry(name: &str, version: &str, info: &Value) -> Self {
        let field = |key: &str| {
            info.pointer(&format!("/info/{key}"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: field("summary"),
            license: field("license"),
            homepage: field("package_url"),
        }
    }
}

/// Errors raised while constructing a parser.
///
/// Both variants are fatal: a caller holding a `ManifestError` never gets a
/// parser to call `parse()` on. Malformed individual entries are not
/// represented here; they are recovered per entry with a logged warning.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The path does not refer to an existing regular file.
    #[error("no manifest file at {}", .path.display())]
    PathNotFound { path: PathBuf },
    /// The path matches no known manifest format.
    #[error("unsupported manifest format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Shared construction-time check: the path must be an existing regular file.
pub(crate) fn validate_file(path: &Path) -> Result<(), ManifestError> {
    if !path.is_file() {
        return Err(ManifestError::PathNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Result of a `parse()` call.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Enriched dependency records
    Dependencies(Vec<Dependency>),
    /// Raw parsed document, extraction left to the caller (pubspec variant)
    Document(serde_yaml::Value),
}

/// Format dispatcher: selects and constructs the parser variant for a path.
///
/// The variant set is closed and selection is a pure function of the file
/// extension (see [`ManifestKind::detect`]); construction-time validation
/// errors from the chosen variant surface unchanged. Nothing needs explicit
/// release after `parse()`: the file handle is closed before the call
/// returns, so acquiring a parser is a plain factory call.
#[derive(Debug)]
pub enum ManifestParser {
    Pyproject(pyproject::PyprojectParser),
    Requirements(requirements::RequirementsParser),
    Pubspec(pubspec::PubspecParser),
}

impl ManifestParser {
    /// Construct the parser variant matching the path's extension.
    pub fn for_path(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        match ManifestKind::detect(&path) {
            Some(ManifestKind::Pyproject) => {
                Ok(Self::Pyproject(pyproject::PyprojectParser::new(path)?))
            }
            Some(ManifestKind::Requirements) => Ok(Self::Requirements(
                requirements::RequirementsParser::new(path)?,
            )),
            Some(ManifestKind::Pubspec) => Ok(Self::Pubspec(pubspec::PubspecParser::new(path)?)),
            None => Err(ManifestError::UnsupportedFormat { path }),
        }
    }

    /// Which format this parser handles.
    pub fn kind(&self) -> ManifestKind {
        match self {
            Self::Pyproject(_) => ManifestKind::Pyproject,
            Self::Requirements(_) => ManifestKind::Requirements,
            Self::Pubspec(_) => ManifestKind::Pubspec,
        }
    }

    /// Read the manifest and resolve its packages.
    pub async fn parse(&self) -> anyhow::Result<ParseOutcome> {
        match self {
            Self::Pyproject(parser) => Ok(ParseOutcome::Dependencies(parser.parse().await?)),
            Self::Requirements(parser) => Ok(ParseOutcome::Dependencies(parser.parse().await?)),
            Self::Pubspec(parser) => Ok(ParseOutcome::Document(parser.parse().await?)),
        }
    }
}

pub mod pubspec;
pub mod pyproject;
pub mod requirements;
