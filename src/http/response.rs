//! Server replies.

use reqwest::StatusCode;

/// Status and raw text body of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoResponse {
    pub status: StatusCode,
    pub body: String,
}

impl EchoResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as it should be shown on the console.
    ///
    /// With `pretty_json` set, a body that parses as JSON is re-indented;
    /// anything else is returned untouched.
    pub fn render_body(&self, pretty_json: bool) -> String {
        if pretty_json {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&self.body) {
                if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                    return pretty;
                }
            }
        }
        self.body.clone()
    }
}
