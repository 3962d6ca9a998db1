//! # PyPI Registry Client
//!
//! Client for the [PyPI](https://pypi.org) JSON API.
//!
//! ## API Endpoints Used
//!
//! - **Endpoint**: `GET /pypi/{package-name}/json`
//! - **Response**: JSON with project metadata (`info.summary`,
//!   `info.license`, `info.package_url`) and all releases (`releases`,
//!   keyed by version string)
//!
//! Versioned lookups are answered from the `releases` map of the package
//! document rather than a second endpoint: the first release file recorded
//! under the exact version string is the payload. A version PyPI never
//! published therefore reads as absent even though the package itself
//! exists.
//!
//! ## Error Handling
//!
//! Any non-success status collapses to an absent result; so do transport
//! faults, which are logged at debug level. No retries.

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use super::Registry;
use super::http_client::create_shared_client;

/// Client for the PyPI registry
#[derive(Debug)]
pub struct PyPiRegistry {
    client: Arc<Client>,
    base_url: String,
}

impl PyPiRegistry {
    /// Constructs a PyPiRegistry using the provided shared HTTP client.
    ///
    /// The returned registry is configured with the default PyPI API base
    /// URL (`https://pypi.org/pypi`).
    pub fn with_client(client: Arc<Client>) -> Self {
        Self {
            client,
            base_url: "https://pypi.org/pypi".to_string(),
        }
    }

    /// Points the client at a different API root. Tests use this to target
    /// a stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn http_client(&self) -> Arc<Client> {
        Arc::clone(&self.client)
    }

    async fn fetch(
        &self,
        package_name: &str,
        package_version: Option<&str>,
    ) -> anyhow::Result<Option<Value>> {
        let url = format!("{}/{}/json", self.base_url, package_name);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let data: Value = response.json().await?;

        if let Some(version) = package_version {
            let release = data
                .get("releases")
                .and_then(|releases| releases.get(version))
                .and_then(|files| files.get(0))
                .cloned();
            return Ok(release);
        }

        Ok(Some(data))
    }
}

impl Default for PyPiRegistry {
    fn default() -> Self {
        Self::with_client(create_shared_client().expect("Failed to create HTTP client"))
    }
}

impl Registry for PyPiRegistry {
    async fn request_info(
        &self,
        package_name: &str,
        package_version: Option<&str>,
    ) -> Option<Value> {
        match self.fetch(package_name, package_version).await {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("PyPI lookup failed for {}: {}", package_name, e);
                None
            }
        }
    }
}
