//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / http client / session produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! Consumers:
//!     → stderr, filtered by RUST_LOG or `observability.log_level`
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr; stdout carries only the console dialogue
//! - Request ID flows through every log line of a send

pub mod logging;

pub use logging::{env_filter, init_logging};
