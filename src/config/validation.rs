//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Endpoints must be absolute http(s) URLs
//! - The GET endpoint must not carry its own query string or a fragment
//! - Timeouts, when set, must be positive
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid URL '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field}: unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("{field}: must not contain a query string, parameters are appended from headers")]
    QueryNotAllowed { field: &'static str },

    #[error("{field}: must not contain a fragment, the query string would land inside it")]
    FragmentNotAllowed { field: &'static str },

    #[error("{field}: must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(url) = check_url("endpoints.get_url", &config.endpoints.get_url, &mut errors) {
        if url.query().is_some() {
            errors.push(ValidationError::QueryNotAllowed {
                field: "endpoints.get_url",
            });
        }
        if url.fragment().is_some() {
            errors.push(ValidationError::FragmentNotAllowed {
                field: "endpoints.get_url",
            });
        }
    }
    check_url("endpoints.post_url", &config.endpoints.post_url, &mut errors);

    if config.timeouts.request_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout {
            field: "timeouts.request_secs",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) -> Option<Url> {
    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(e) => {
            errors.push(ValidationError::InvalidUrl {
                field,
                value: value.to_string(),
                reason: e.to_string(),
            });
            return None;
        }
    };

    match url.scheme() {
        "http" | "https" => Some(url),
        other => {
            errors.push(ValidationError::UnsupportedScheme {
                field,
                scheme: other.to_string(),
            });
            None
        }
    }
}
