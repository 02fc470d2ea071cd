//! Application Configuration
//!
//! Configuration for the session store and navigation guard.

use std::time::Duration;

use crate::domain::value_object::route::RouteName;

/// Session gate configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Upper bound for one identity round-trip (expiry counts as failure)
    pub verify_timeout: Duration,
    /// Route unauthenticated users are sent to
    pub login_route: RouteName,
    /// Route authenticated users are sent to instead of the login route
    pub home_route: RouteName,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            verify_timeout: Duration::from_secs(10),
            login_route: RouteName::LOGIN,
            home_route: RouteName::HOME,
        }
    }
}

impl SessionConfig {
    /// Create config with a custom verification timeout
    pub fn with_verify_timeout(verify_timeout: Duration) -> Self {
        Self {
            verify_timeout,
            ..Default::default()
        }
    }

    /// Create config for development (fail fast against a local API)
    pub fn development() -> Self {
        Self::with_verify_timeout(Duration::from_secs(3))
    }

    /// Get verification timeout in milliseconds
    pub fn verify_timeout_ms(&self) -> i64 {
        self.verify_timeout.as_millis() as i64
    }
}
