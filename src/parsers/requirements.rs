//! Parser for requirements.txt style constraint lists

use std::path::PathBuf;

use crate::registries::Registry;
use crate::registries::pypi::PyPiRegistry;

use super::{Dependency, ManifestError, validate_file};

/// Version constraint operators, in match priority order.
///
/// The first operator present anywhere in the line wins the split, even if
/// a lower-priority operator appears earlier in the text.
const OPERATORS: [&str; 5] = ["==", ">=", "<=", "~=", "!="];

/// Editable/VCS install marker; such lines carry no resolvable package.
const EDITABLE_MARKER: &str = "-e";

/// Parser for line-oriented requirement files (`.txt`).
///
/// Bound to PyPI: one registry lookup per declared package.
#[derive(Debug)]
pub struct RequirementsParser {
    path: PathBuf,
    registry: PyPiRegistry,
}

impl RequirementsParser {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        Self::with_registry(path, PyPiRegistry::default())
    }

    /// Bind to a specific registry client. Tests use this to point the
    /// parser at a stub server.
    pub fn with_registry(
        path: impl Into<PathBuf>,
        registry: PyPiRegistry,
    ) -> Result<Self, ManifestError> {
        let path = path.into();
        validate_file(&path)?;
        if !path.to_str().unwrap_or_default().ends_with(".txt") {
            return Err(ManifestError::UnsupportedFormat { path });
        }
        Ok(Self { path, registry })
    }

    /// Parse the file and enrich each declared package.
    ///
    /// A line that cannot be decomposed into name and constraint, or whose
    /// package the registry has no record for, is skipped with a warning.
    /// One bad line never aborts the run.
    pub async fn parse(&self) -> anyhow::Result<Vec<Dependency>> {
        let content = tokio::fs::read_to_string(&self.path).await?;

        let mut dependencies = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with(EDITABLE_MARKER) {
                continue;
            }

            let Some((name, version)) = split_constraint(line) else {
                tracing::warn!("Invalid dependency line format: {}", line);
                continue;
            };

            match self.registry.request_info(name, None).await {
                Some(info) => dependencies.push(Dependency::from_registry(name, version, &info)),
                None => {
                    tracing::warn!("No registry record for dependency line: {}", line);
                }
            }
        }

        Ok(dependencies)
    }
}

/// Split a requirement line into (name, constraint).
///
/// Operators are tried in [`OPERATORS`] order; a line with no operator is a
/// bare name with an empty constraint. Returns `None` when the matched
/// operator occurs more than once, since the line cannot be decomposed.
fn split_constraint(line: &str) -> Option<(&str, &str)> {
    for op in OPERATORS {
        if line.contains(op) {
            let mut parts = line.split(op);
            let name = parts.next()?;
            let version = parts.next()?;
            if parts.next().is_some() {
                return None;
            }
            return Some((name, version));
        }
    }
    Some((line, ""))
}
