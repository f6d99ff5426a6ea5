// Client configuration
//
// Loaded from environment variables, with builder-style overrides.

use std::env;
use std::time::Duration;

/// Default backend address of the management service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8065";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::HttpClient`]
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL; endpoint paths are appended to it
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Value sent as the User-Agent header
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `DATAAGENT_API_URL`: backend base URL (default: http://localhost:8065)
    /// - `DATAAGENT_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("DATAAGENT_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout_secs = env::var("DATAAGENT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL without trailing slashes
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("dataagent-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_base_url() {
        let config = ClientConfig::new("http://console.local:8065///");
        assert_eq!(config.normalized_base_url(), "http://console.local:8065");
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://localhost:1")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("tests");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_from_env() {
        env::set_var("DATAAGENT_API_URL", "http://agent.internal:9000");
        env::set_var("DATAAGENT_TIMEOUT_SECS", "not-a-number");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://agent.internal:9000");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        env::remove_var("DATAAGENT_API_URL");
        env::remove_var("DATAAGENT_TIMEOUT_SECS");
    }
}
