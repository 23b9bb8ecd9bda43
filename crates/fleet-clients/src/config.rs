//! Client configuration.
//!
//! Provides configuration for the TweetFleet backend endpoint and request
//! timeouts. Configuration is loaded from environment variables with
//! sensible defaults for local development.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    /// Base URL for the backend (e.g. "http://localhost:3000").
    pub base_url: String,

    /// Static admin token, for deployments using the X-Admin-Token scheme
    /// instead of the password login round trip.
    pub admin_token: Option<String>,
}

impl ServiceEndpoint {
    /// Build a full URL by appending a path to the base URL.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Check if a static admin token is configured.
    pub fn has_admin_token(&self) -> bool {
        self.admin_token.is_some()
    }
}

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend endpoint configuration.
    pub backend: ServiceEndpoint,

    /// Default request timeout in seconds.
    pub default_timeout_secs: u64,
}

impl Default for ClientConfig {
    /// Returns default configuration suitable for local development.
    fn default() -> Self {
        Self {
            backend: ServiceEndpoint {
                base_url: "http://localhost:3000".to_string(),
                admin_token: None,
            },
            default_timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FLEET_BACKEND_URL`: backend base URL (default: http://localhost:3000)
    /// - `FLEET_ADMIN_TOKEN`: static admin token for the X-Admin-Token scheme
    /// - `FLEET_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            backend: ServiceEndpoint {
                base_url: std::env::var("FLEET_BACKEND_URL").unwrap_or(default.backend.base_url),
                admin_token: std::env::var("FLEET_ADMIN_TOKEN").ok(),
            },
            default_timeout_secs: std::env::var("FLEET_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.default_timeout_secs),
        }
    }

    /// Get the default request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }
}
