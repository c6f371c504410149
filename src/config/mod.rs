//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (httpbin.org echo endpoints)
//!     → loader.rs (optional TOML file, then command-line overrides)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to the HTTP client and session at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so no file is needed at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError, ConfigOverrides};
pub use schema::ClientConfig;
pub use schema::EndpointConfig;
pub use schema::NetworkConfig;
pub use schema::ObservabilityConfig;
pub use schema::OutputConfig;
pub use schema::TimeoutConfig;
