//! Configuration types for catalog client construction.

use std::collections::BTreeMap;
use std::time::Duration;

/// Base URL of the production catalog service.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Fixed upper bound on the wait for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for catalog client construction.
#[derive(Debug, Clone)]
pub struct CatalogClientConfig {
    /// Base URL for the catalog API.
    pub catalog_url: String,
    /// Upper bound on the wait for a single request, connection included.
    pub timeout: Duration,
    /// Optional `User-Agent` sent with every request.
    pub user_agent: Option<String>,
    /// Additional headers to include in requests.
    pub extra_headers: BTreeMap<String, String>,
}

impl Default for CatalogClientConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            extra_headers: BTreeMap::new(),
        }
    }
}
