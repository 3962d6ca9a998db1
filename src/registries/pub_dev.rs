//! Client for pub.dev registry (Dart/Flutter packages)

use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use super::Registry;
use super::http_client::create_shared_client;

/// Client for the pub.dev registry
#[derive(Debug)]
pub struct PubDevRegistry {
    client: Arc<Client>,
    base_url: String,
}

impl PubDevRegistry {
    /// Constructs a PubDevRegistry using the provided shared HTTP client,
    /// configured with the default pub.dev API base URL.
    pub fn with_client(client: Arc<Client>) -> Self {
        Self {
            client,
            base_url: "https://pub.dev/api".to_string(),
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
        let mut url = format!("{}/packages/{}", self.base_url, package_name);
        if let Some(version) = package_version {
            url.push_str(&format!("/versions/{version}"));
        }

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }
}

impl Default for PubDevRegistry {
    fn default() -> Self {
        Self::with_client(create_shared_client().expect("Failed to create HTTP client"))
    }
}

impl Registry for PubDevRegistry {
    async fn request_info(
        &self,
        package_name: &str,
        package_version: Option<&str>,
    ) -> Option<Value> {
        match self.fetch(package_name, package_version).await {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("pub.dev lookup failed for {}: {}", package_name, e);
                None
            }
        }
    }
}
