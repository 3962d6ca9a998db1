//! Parser for pyproject.toml dependency tables

use std::path::PathBuf;

use crate::registries::Registry;
use crate::registries::pypi::PyPiRegistry;

use super::{Dependency, ManifestError, validate_file};

/// Parser for structured TOML manifests (`.toml`).
///
/// Walks the poetry dependency table and resolves every entry against PyPI.
#[derive(Debug)]
pub struct PyprojectParser {
    path: PathBuf,
    registry: PyPiRegistry,
}

impl PyprojectParser {
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
        if !path.to_str().unwrap_or_default().ends_with(".toml") {
            return Err(ManifestError::UnsupportedFormat { path });
        }
        Ok(Self { path, registry })
    }

    /// Parse the dependency table and enrich each entry.
    ///
    /// Entries the registry has no record for are omitted from the result.
    pub async fn parse(&self) -> anyhow::Result<Vec<Dependency>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let document: toml::Value = toml::from_str(&content)?;

        let mut dependencies = Vec::new();

        let Some(root) = document.as_table() else {
            return Ok(dependencies);
        };

        for section in root.values() {
            let Some(table) = poetry_dependencies(section) else {
                continue;
            };

            for (name, value) in table {
                let version = render_version(value);

                let Some(info) = self.registry.request_info(name, None).await else {
                    continue;
                };

                dependencies.push(Dependency::from_registry(name, &version, &info));
            }
        }

        Ok(dependencies)
    }
}

/// The dependency table sits two levels below a tool section:
/// `[tool.poetry.dependencies]`.
fn poetry_dependencies(section: &toml::Value) -> Option<&toml::map::Map<String, toml::Value>> {
    section.get("poetry")?.get("dependencies")?.as_table()
}

/// Version constraints are usually plain strings; tables like
/// `{ version = "^2.0", optional = true }` keep their `version` key, and
/// anything else is rendered as written.
fn render_version(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other
            .get("version")
            .and_then(toml::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poetry_dependencies_lookup() {
        let document: toml::Value = toml::from_str(
            r#"
[tool.poetry.dependencies]
python = "^3.11"
requests = "^2.32.3"

[tool.poetry.group.dev.dependencies]
pytest = "^8.2.2"
"#,
        )
        .unwrap();

        let tool = document.get("tool").unwrap();
        let deps = poetry_dependencies(tool).unwrap();
        assert_eq!(deps.len(), 2);
        assert!(deps.contains_key("python"));
        assert!(deps.contains_key("requests"));
    }

    #[test]
    fn test_poetry_dependencies_absent() {
        let document: toml::Value = toml::from_str(
            r#"
[build-system]
requires = ["poetry-core"]
"#,
        )
        .unwrap();

        let section = document.get("build-system").unwrap();
        assert!(poetry_dependencies(section).is_none());
    }

    #[test]
    fn test_render_version_string() {
        let value = toml::Value::String("^2.0.0".to_string());
        assert_eq!(render_version(&value), "^2.0.0");
    }

    #[test]
    fn test_render_version_table() {
        let document: toml::Value =
            toml::from_str(r#"requests = { version = "^2.25.0", optional = true }"#).unwrap();
        let value = document.get("requests").unwrap();
        assert_eq!(render_version(value), "^2.25.0");
    }
}
