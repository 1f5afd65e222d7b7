//! API client configuration.

/// Base address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed base address (origin + `/api` root) every request is relative to.
///
/// Built once by the composition root and handed to each resource group;
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a configuration for `base_url`. A trailing `/` is dropped so
    /// that resource paths join without doubling it.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured base address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a resource path such as `/rooms/42`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
