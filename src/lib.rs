//! Interactive header echo client library.

pub mod config;
pub mod headers;
pub mod http;
pub mod observability;
pub mod repl;

pub use config::schema::ClientConfig;
pub use headers::HeaderStore;
pub use http::EchoClient;
pub use repl::Session;
