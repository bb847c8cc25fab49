//! HTTP transport abstraction.
//!
//! The lookup client never talks to the network directly: it hands fully built
//! requests to a [`Transport`] and interprets what comes back. [`HttpTransport`]
//! is the default implementation on top of `reqwest`; tests and embedders can
//! supply their own.

mod http;

use async_trait::async_trait;

use crate::error_handling::TransportError;

pub use http::HttpTransport;

/// Status, reason phrase and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Status line reason phrase (e.g. "Unauthorized"); may be empty
    pub status_text: String,
    /// Response body decoded as text
    pub body: String,
}

impl TransportResponse {
    /// Creates a response, deriving the reason phrase from the status code.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            status_text,
            body: body.into(),
        }
    }
}

/// Sends lookup requests to the remote service.
///
/// This is the only I/O boundary of the crate. Deadlines and cancellation are
/// the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET request to `url`.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;

    /// Issues a POST request to `url` with a plain-text body.
    async fn post(&self, url: &str, body: String) -> Result<TransportResponse, TransportError>;
}
