//! HTTP client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the readings-service client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Absolute base URL of the readings service (e.g. `http://localhost:8000`).
    pub base_url: String,
    /// Per-request timeout in seconds. `0` disables the timeout.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 0,
        }
    }
}

impl HttpConfig {
    /// The request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
