//! Transport configuration.

use serde::Deserialize;

/// Settings owned by the HTTP transport, not by the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Whole-request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: concat!("hostel/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
