// Shared test helpers: a recording stub transport and client constructors.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use safe_browse::{ClientConfig, LookupClient, Transport, TransportError, TransportResponse};

/// A request as seen by the stub transport.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)] // Used by other test files
pub enum RecordedRequest {
    Get(String),
    Post(String, String),
}

/// Transport that records every request and replies with a canned outcome.
pub struct StubTransport {
    reply: Result<TransportResponse, String>,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[allow(dead_code)] // Used by other test files
impl StubTransport {
    /// Replies to every request with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(TransportResponse::new(status, body)),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Fails every request with a transport error.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("stub lock poisoned").clone()
    }

    fn respond(&self, request: RecordedRequest) -> Result<TransportResponse, TransportError> {
        self.requests
            .lock()
            .expect("stub lock poisoned")
            .push(request);
        self.reply.clone().map_err(TransportError::Other)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.respond(RecordedRequest::Get(url.to_string()))
    }

    async fn post(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        self.respond(RecordedRequest::Post(url.to_string(), body))
    }
}

/// Configuration pointing at a fake endpoint.
#[allow(dead_code)] // Used by other test files
pub fn test_config() -> ClientConfig {
    ClientConfig::new("test-api-key", "safe_browse_test").with_endpoint("https://lookup.test/api")
}

/// Client wired to `stub`.
#[allow(dead_code)] // Used by other test files
pub fn client_with(stub: &Arc<StubTransport>) -> LookupClient {
    LookupClient::with_shared_transport(test_config(), stub.clone())
        .expect("test config should be valid")
}
