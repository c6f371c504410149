//! Request preparation.
//!
//! # Responsibilities
//! - Model the two request kinds the client can issue
//! - Resolve the final URL and body from endpoints and the header store
//! - Generate a unique request ID per send for log correlation
//!
//! # Design Decisions
//! - Preparation is pure (no I/O), so the session can be tested offline
//! - GET carries the headers in the query string, POST in a form body

use std::fmt;

use uuid::Uuid;

use crate::config::EndpointConfig;
use crate::headers::{
    encode_as_form_payload, encode_as_query_string, FormPayload, HeaderStore,
};

/// Header name used to propagate request IDs.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Unique ID attached to every outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The kind of request to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Get,
    Post,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Get => f.write_str("GET"),
            RequestKind::Post => f.write_str("POST"),
        }
    }
}

/// A fully resolved request, ready to hand to a [`RequestSender`](crate::http::RequestSender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedRequest {
    Get { url: String },
    Post { url: String, form: FormPayload },
}

impl PreparedRequest {
    /// Build the request for `kind` from the current headers.
    pub fn new(kind: RequestKind, endpoints: &EndpointConfig, headers: &HeaderStore) -> Self {
        match kind {
            RequestKind::Get => PreparedRequest::Get {
                url: format!("{}{}", endpoints.get_url, encode_as_query_string(headers)),
            },
            RequestKind::Post => PreparedRequest::Post {
                url: endpoints.post_url.clone(),
                form: encode_as_form_payload(headers),
            },
        }
    }

    pub fn kind(&self) -> RequestKind {
        match self {
            PreparedRequest::Get { .. } => RequestKind::Get,
            PreparedRequest::Post { .. } => RequestKind::Post,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            PreparedRequest::Get { url } | PreparedRequest::Post { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> EndpointConfig {
        EndpointConfig {
            get_url: "http://echo.test/get".into(),
            post_url: "http://echo.test/post".into(),
        }
    }

    #[test]
    fn test_get_appends_query_string() {
        let headers: HeaderStore = [("x", "1")].into_iter().collect();
        let request = PreparedRequest::new(RequestKind::Get, &endpoints(), &headers);

        assert_eq!(request.kind(), RequestKind::Get);
        assert_eq!(request.url(), "http://echo.test/get?x=1");
    }

    #[test]
    fn test_get_without_headers_uses_base_url() {
        let request = PreparedRequest::new(RequestKind::Get, &endpoints(), &HeaderStore::new());
        assert_eq!(request.url(), "http://echo.test/get");
    }

    #[test]
    fn test_post_carries_form() {
        let headers: HeaderStore = [("b", "2"), ("a", "1")].into_iter().collect();
        let request = PreparedRequest::new(RequestKind::Post, &endpoints(), &headers);

        assert_eq!(
            request,
            PreparedRequest::Post {
                url: "http://echo.test/post".into(),
                form: vec![("a".into(), "1".into()), ("b".into(), "2".into())],
            }
        );
    }

    #[test]
    fn test_request_kind_display() {
        assert_eq!(RequestKind::Get.to_string(), "GET");
        assert_eq!(RequestKind::Post.to_string(), "POST");
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::new(), RequestId::new());
    }
}
