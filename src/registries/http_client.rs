//! Shared HTTP client for the registry clients.
//!
//! One `reqwest::Client` is shared between registries, so repeated lookups
//! reuse connections and the DNS cache instead of paying a TLS handshake
//! per package.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = concat!("sbom-seed/", env!("CARGO_PKG_VERSION"));

/// Upper bound for a single registry lookup.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

pub fn create_shared_client() -> anyhow::Result<Arc<Client>> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(10)
        .tcp_keepalive(Duration::from_secs(60))
        .build()?;

    Ok(Arc::new(client))
}
