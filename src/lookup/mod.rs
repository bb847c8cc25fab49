//! Lookup client.
//!
//! [`LookupClient`] runs the whole pipeline for one call:
//! 1. validate the target and build the request ([`request`])
//! 2. hand it to the [`Transport`]
//! 3. classify the status and parse the body ([`response`])
//!
//! Validation happens in [`LookupClient::prepare`] before anything is sent, so
//! input errors never depend on the network.

pub mod request;
pub mod response;

use std::sync::Arc;

use log::info;

use crate::config::ClientConfig;
use crate::error_handling::LookupError;
use crate::transport::Transport;

pub use request::{encode_component, LookupMode, LookupRequest, LookupTarget};
pub use response::{LookupResult, Verdict};

/// Client for the URL lookup service.
///
/// Holds an immutable configuration and a transport. Cloning is cheap and
/// clones can run lookups concurrently; every call owns its own request and
/// result.
///
/// # Example
///
/// ```no_run
/// use safe_browse::{ClientConfig, HttpTransport, LookupClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new(10, "my-app/1.0")?;
/// let client = LookupClient::new(ClientConfig::new("api-key", "my-app"), transport)?;
///
/// let result = client.lookup(vec!["http://example.com", "http://example.org"]).await?;
/// for (url, verdict) in &result.verdicts {
///     println!("{url}: {verdict}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LookupClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl LookupClient {
    /// Creates a client, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Configuration` if the API key or client name is
    /// missing, the endpoint is not absolute, or an extra parameter is invalid.
    pub fn new<T>(config: ClientConfig, transport: T) -> Result<Self, LookupError>
    where
        T: Transport + 'static,
    {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Creates a client around a transport shared with other clients.
    ///
    /// # Errors
    ///
    /// Same as [`LookupClient::new`].
    pub fn with_shared_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, LookupError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validates `target` and builds the request without sending it.
    ///
    /// # Errors
    ///
    /// `InvalidUrl`, `TooManyUrls` or `NoValidUrl`; see
    /// [`request::build_request`].
    pub fn prepare(&self, target: impl Into<LookupTarget>) -> Result<LookupRequest, LookupError> {
        request::build_request(&self.config, target.into())
    }

    /// Sends a prepared request and interprets the response.
    ///
    /// # Errors
    ///
    /// - `Transport` if the transport fails (passed through unchanged)
    /// - `ApiResponse` for status 400, 401 or 503
    /// - `MalformedResponse` if a batch body does not match the submission
    pub async fn execute(&self, request: LookupRequest) -> Result<LookupResult, LookupError> {
        self.config.diagnose(|| "Sending request to lookup service...".to_string());

        let response = match request.body() {
            Some(body) => self.transport.post(request.url(), body.to_string()).await,
            None => self.transport.get(request.url()).await,
        }?;

        self.config
            .diagnose(|| format!("Response Status: {}", response.status));
        self.config
            .diagnose(|| format!("Raw Response Body: {}", response.body));

        let result = response::interpret_response(&request, response)?;

        self.config.diagnose(|| "Finished.".to_string());
        info!(
            "Looked up {} URL(s): {} flagged",
            result.verdicts.len(),
            result.flagged().count()
        );
        Ok(result)
    }

    /// Looks up one URL or a list of URLs.
    ///
    /// A string selects single mode (GET); a list selects batch mode (POST).
    /// Input is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Any error of [`LookupClient::prepare`] or [`LookupClient::execute`].
    pub async fn lookup(
        &self,
        target: impl Into<LookupTarget>,
    ) -> Result<LookupResult, LookupError> {
        let request = self.prepare(target)?;
        self.execute(request).await
    }
}

impl std::fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
