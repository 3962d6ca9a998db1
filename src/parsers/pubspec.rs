//! Loader for pubspec-style YAML manifests

use std::path::PathBuf;

use crate::registries::pub_dev::PubDevRegistry;

use super::{ManifestError, validate_file};

/// Parser for YAML manifests (`.yml`/`.yaml`).
///
/// Degenerate variant: `parse()` validates and loads the document but
/// leaves dependency extraction to the caller. A pub.dev client is bound at
/// construction but not consulted by `parse()` yet.
#[derive(Debug)]
pub struct PubspecParser {
    path: PathBuf,
    #[allow(dead_code)]
    registry: PubDevRegistry,
}

impl PubspecParser {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        Self::with_registry(path, PubDevRegistry::default())
    }

    /// Bind to a specific registry client.
    pub fn with_registry(
        path: impl Into<PathBuf>,
        registry: PubDevRegistry,
    ) -> Result<Self, ManifestError> {
        let path = path.into();
        validate_file(&path)?;
        let name = path.to_str().unwrap_or_default();
        if !name.ends_with(".yml") && !name.ends_with(".yaml") {
            return Err(ManifestError::UnsupportedFormat { path });
        }
        Ok(Self { path, registry })
    }

    /// Load and return the parsed document unchanged.
    pub async fn parse(&self) -> anyhow::Result<serde_yaml::Value> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_yaml::from_str(&content)?)
    }
}
