//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default GET echo endpoint.
pub const DEFAULT_GET_URL: &str = "http://httpbin.org/get";

/// Default POST echo endpoint.
pub const DEFAULT_POST_URL: &str = "http://httpbin.org/post";

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Echo endpoints requests are sent to.
    pub endpoints: EndpointConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Network settings for the HTTP client.
    pub network: NetworkConfig,

    /// Console output settings.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Echo endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL for GET requests; the query string is appended to it.
    pub get_url: String,

    /// URL for POST requests.
    pub post_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            get_url: DEFAULT_GET_URL.to_string(),
            post_url: DEFAULT_POST_URL.to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Overall request timeout. `None` waits for the server indefinitely.
    pub request_secs: Option<u64>,
}

/// Network configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            use_system_proxy: true,
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print replies that parse as JSON.
    pub pretty_json: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoints.get_url, DEFAULT_GET_URL);
        assert_eq!(config.endpoints.post_url, DEFAULT_POST_URL);
        assert_eq!(config.timeouts.request_secs, None);
        assert!(config.network.use_system_proxy);
        assert!(!config.output.pretty_json);
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [endpoints]
            get_url = "http://localhost:3000/get"

            [timeouts]
            request_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.get_url, "http://localhost:3000/get");
        assert_eq!(config.endpoints.post_url, DEFAULT_POST_URL);
        assert_eq!(config.timeouts.request_secs, Some(5));
        assert_eq!(config.observability, ObservabilityConfig::default());
    }

    #[test]
    fn test_empty_toml() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
