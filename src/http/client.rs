//! Outgoing HTTP client.
//!
//! # Responsibilities
//! - Send prepared GET/POST requests to the echo endpoints
//! - Apply the optional overall request timeout
//! - Tag each request with an `x-request-id` header and log its outcome
//! - Keep transport failures apart from HTTP error statuses
//!
//! # Design Decisions
//! - Non-2xx replies are still replies: the caller decides how to show them
//! - No retries; a failed send is reported once and the session moves on
//! - Without a configured timeout the request waits as long as the server does

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::ClientConfig;
use crate::http::request::{PreparedRequest, RequestId, X_REQUEST_ID};
use crate::http::response::EchoResponse;

/// Errors raised while sending a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    /// Connecting or sending failed (DNS, refused, reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// No reply within the configured timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// The reply body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Anything that can deliver a [`PreparedRequest`] and return the reply.
#[allow(async_fn_in_trait)]
pub trait RequestSender {
    async fn send(&self, request: &PreparedRequest) -> Result<EchoResponse, RequestError>;
}

/// `reqwest`-backed sender used by the binary.
#[derive(Debug, Clone)]
pub struct EchoClient {
    client: reqwest::Client,
    timeout_secs: Option<u64>,
}

impl EchoClient {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        let timeout_secs = config.timeouts.request_secs;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("header-echo/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.network.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| RequestError::Build(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs,
        })
    }

    fn classify(&self, err: reqwest::Error) -> RequestError {
        match self.timeout_secs {
            Some(secs) if err.is_timeout() => RequestError::Timeout(secs),
            _ => RequestError::Transport(err.to_string()),
        }
    }
}

impl RequestSender for EchoClient {
    async fn send(&self, request: &PreparedRequest) -> Result<EchoResponse, RequestError> {
        let request_id = RequestId::new();
        let started = Instant::now();

        tracing::debug!(
            request_id = %request_id,
            method = %request.kind(),
            url = %request.url(),
            "Sending request"
        );

        let builder = match request {
            PreparedRequest::Get { url } => self.client.get(url),
            PreparedRequest::Post { url, form } => self.client.post(url).form(form),
        };

        let response = builder
            .header(X_REQUEST_ID, request_id.to_string())
            .send()
            .await
            .map_err(|e| {
                let err = self.classify(e);
                tracing::debug!(request_id = %request_id, error = %err, "Send failed");
                err
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| match self.classify(e) {
            RequestError::Transport(msg) => RequestError::Body(msg),
            other => other,
        })?;

        tracing::info!(
            request_id = %request_id,
            method = %request.kind(),
            status = status.as_u16(),
            body_len = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Reply received"
        );

        Ok(EchoResponse::new(status, body))
    }
}
