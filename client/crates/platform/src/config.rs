//! Transport Configuration
//!
//! Where the API lives and how requests carry credentials.

use std::time::Duration;

/// Transport configuration
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// API base URL (scheme + host + port)
    pub base_url: String,
    /// Path of the "who am I" endpoint, relative to `base_url`
    pub identity_path: String,
    /// Cookie carrying the anti-forgery token
    pub csrf_cookie_name: String,
    /// Header the anti-forgery token is echoed in
    pub csrf_header_name: String,
    /// Per-request timeout enforced by the HTTP client
    pub request_timeout: Duration,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            identity_path: "/api/auth/user/".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            csrf_header_name: "X-CSRFToken".to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("session-gate/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl TransportConfig {
    /// Create config pointing at a specific API origin
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config for development (short timeout, local API)
    pub fn development() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            ..Default::default()
        }
    }

    /// Get request timeout in milliseconds
    pub fn request_timeout_ms(&self) -> i64 {
        self.request_timeout.as_millis() as i64
    }
}
