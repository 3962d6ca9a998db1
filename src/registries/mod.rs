//! Registry clients for fetching package metadata

use serde_json::Value;

/// Trait for registry clients.
///
/// `request_info` performs exactly one network round trip per call, bounded
/// by the shared client timeout. `None` means the registry has no record for
/// the package (or the requested version), which is a normal outcome, not
/// an error.
/// Transport faults collapse to `None` as well: callers never see a hard
/// error from a lookup.
///
/// Note: async_fn_in_trait is allowed because this trait is internal and already bounds Send + Sync
#[allow(async_fn_in_trait)]
pub trait Registry: Send + Sync {
    /// Look up metadata for a package, optionally pinned to one version.
    async fn request_info(
        &self,
        package_name: &str,
        package_version: Option<&str>,
    ) -> Option<Value>;
}

pub mod http_client;
pub mod pub_dev;
pub mod pypi;
