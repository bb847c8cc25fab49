//! `reqwest`-backed transport.

use std::sync::Arc;

use async_trait::async_trait;
use log::trace;
use reqwest::header::CONTENT_TYPE;

use crate::error_handling::{InitializationError, TransportError};
use crate::initialization::init_client;
use crate::transport::{Transport, TransportResponse};

/// Default transport: one shared `reqwest::Client` with a request timeout.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Arc<reqwest::Client>,
}

impl HttpTransport {
    /// Builds a transport with the given timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(timeout_seconds: u64, user_agent: &str) -> Result<Self, InitializationError> {
        let client = init_client(timeout_seconds, user_agent)?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn from_client(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }

    async fn into_transport_response(
        response: reqwest::Response,
    ) -> Result<TransportResponse, TransportError> {
        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await?;
        trace!("Transport received {} ({} bytes)", status, body.len());
        Ok(TransportResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        Self::into_transport_response(response).await
    }

    async fn post(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        Self::into_transport_response(response).await
    }
}
