//! HTTP client subsystem.
//!
//! # Data Flow
//! ```text
//! HeaderStore + RequestKind
//!     → request.rs (PreparedRequest: final URL, form body)
//!     → client.rs (RequestSender; EchoClient sends via reqwest)
//!     → response.rs (EchoResponse: status + raw body)
//!     → printed by the session
//! ```

pub mod client;
pub mod request;
pub mod response;

pub use client::{EchoClient, RequestError, RequestSender};
pub use request::{PreparedRequest, RequestId, RequestKind, X_REQUEST_ID};
pub use response::EchoResponse;
