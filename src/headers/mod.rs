//! Header store and request encoding.
//!
//! # Data Flow
//! ```text
//! `name value` tokens from the session
//!     → store.rs (HeaderStore, last write wins)
//!     → encode.rs (query string for GET, form pairs for POST)
//!     → http::PreparedRequest
//! ```
//!
//! # Design Decisions
//! - The store is an owned value, passed explicitly; there is no global map
//! - Backed by `BTreeMap`, so every listing and encoding is in key order
//! - Encoding is pure: the same store always yields the same output

pub mod encode;
pub mod store;

pub use encode::{encode_as_form_payload, encode_as_query_string, FormPayload};
pub use store::HeaderStore;
