use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Where the catalog lives and how much of it to request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API root, without trailing slash (e.g. `https://host/api/v1`).
    pub base_url: String,
    /// Number of categories shown on the home page.
    pub category_limit: u32,
    /// Size of the product page.
    pub product_limit: u32,
    pub product_offset: u32,
    /// Applied on native builds only; browser fetch has no timeout hook.
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            category_limit: 4,
            product_limit: 12,
            product_offset: 12,
            request_timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Default config with the API root overridden by the compile-time
    /// `CATALOG_API_URL` env var, if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("CATALOG_API_URL").filter(|s| !s.is_empty()) {
            config.base_url = url.to_string();
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Join a path onto the API root, tolerating a trailing slash on either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
