//! Configuration loading from disk and the command line.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line. Each `Some` replaces the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub get_url: Option<String>,
    pub post_url: Option<String>,
    pub request_secs: Option<u64>,
    pub no_proxy: bool,
    pub pretty_json: bool,
}

impl ConfigOverrides {
    /// Apply the overrides on top of `config`.
    pub fn apply(self, config: &mut ClientConfig) {
        if let Some(url) = self.get_url {
            config.endpoints.get_url = url;
        }
        if let Some(url) = self.post_url {
            config.endpoints.post_url = url;
        }
        if let Some(secs) = self.request_secs {
            config.timeouts.request_secs = Some(secs);
        }
        if self.no_proxy {
            config.network.use_system_proxy = false;
        }
        if self.pretty_json {
            config.output.pretty_json = true;
        }
    }
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<ClientConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration: defaults, then the optional file,
/// then command-line overrides. The merged result is validated.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => ClientConfig::default(),
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
