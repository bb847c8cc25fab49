//! Configuration types.
//!
//! This module defines the lookup client configuration and the logging enums
//! used for command-line argument parsing.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_APP_VERSION, DEFAULT_ENDPOINT, DEFAULT_PROTOCOL_VERSION, DIAGNOSTIC_LOG_TARGET,
    PARAM_APP_VERSION, PARAM_PROTOCOL_VERSION, RESERVED_PARAMS,
};
use crate::error_handling::LookupError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pluggable diagnostic sink invoked for each lookup stage when debug mode is on.
pub type DiagnosticSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Lookup client configuration.
///
/// Built once and handed to [`crate::LookupClient::new`], which validates it and
/// keeps it immutable for the lifetime of the client. Every client owns its own
/// copy; there are no shared defaults to mutate.
///
/// # Examples
///
/// ```
/// use safe_browse::ClientConfig;
///
/// let config = ClientConfig::new("my-api-key", "my-app")
///     .with_app_version("2.1.0")
///     .with_param("lang", "en");
///
/// assert_eq!(config.protocol_version, "3.0");
/// assert!(!config.debug);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent as `apikey`
    pub api_key: String,

    /// Client name sent as `client`
    pub client_name: String,

    /// Lookup endpoint URL
    pub endpoint: String,

    /// Application version sent as `appver`
    pub app_version: String,

    /// Protocol version sent as `pver`
    pub protocol_version: String,

    /// Report every lookup stage to the diagnostic sink
    pub debug: bool,

    /// Additional query parameters, forwarded unchanged in insertion order
    pub extra_params: Vec<(String, String)>,

    /// Custom diagnostic sink; `log::debug!` is used when unset
    pub diagnostic_sink: Option<DiagnosticSink>,
}

impl ClientConfig {
    /// Creates a configuration with the required credentials and built-in defaults.
    pub fn new(api_key: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_name: client_name.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            app_version: DEFAULT_APP_VERSION.to_string(),
            protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
            debug: false,
            extra_params: Vec::new(),
            diagnostic_sink: None,
        }
    }

    /// Overrides the lookup endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the application version (`appver`).
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    /// Overrides the protocol version (`pver`).
    pub fn with_protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = version.into();
        self
    }

    /// Enables or disables debug diagnostics.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Appends an extra query parameter that is forwarded unchanged.
    ///
    /// `appver` and `pver` override the built-in versions instead of being
    /// appended, so a caller-supplied value replaces the default.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            PARAM_APP_VERSION => self.app_version = value,
            PARAM_PROTOCOL_VERSION => self.protocol_version = value,
            _ => self.extra_params.push((key, value)),
        }
        self
    }

    /// Installs a custom diagnostic sink.
    pub fn with_diagnostic_sink(mut self, sink: DiagnosticSink) -> Self {
        self.diagnostic_sink = Some(sink);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Configuration` if:
    /// - the API key or client name is empty
    /// - the endpoint is not an absolute URL
    /// - an extra parameter has an empty key or reuses a reserved key
    pub fn validate(&self) -> Result<(), LookupError> {
        if self.api_key.trim().is_empty() {
            return Err(LookupError::Configuration(
                "An API key is required to connect to the Safe Browsing API".to_string(),
            ));
        }
        if self.client_name.trim().is_empty() {
            return Err(LookupError::Configuration(
                "Client name is required, it helps the service identify your application"
                    .to_string(),
            ));
        }
        if url::Url::parse(&self.endpoint).is_err() {
            return Err(LookupError::Configuration(format!(
                "Endpoint must be an absolute URL, got '{}'",
                self.endpoint
            )));
        }
        for (key, _) in &self.extra_params {
            if key.is_empty() {
                return Err(LookupError::Configuration(
                    "Extra query parameter keys must not be empty".to_string(),
                ));
            }
            if RESERVED_PARAMS.contains(&key.as_str()) {
                return Err(LookupError::Configuration(format!(
                    "Query parameter '{}' is set by the client and cannot be overridden",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Reports a diagnostic message when debug mode is enabled.
    ///
    /// The message is built lazily so disabled diagnostics cost nothing.
    pub(crate) fn diagnose<F>(&self, message: F)
    where
        F: FnOnce() -> String,
    {
        if !self.debug {
            return;
        }
        let message = message();
        match &self.diagnostic_sink {
            Some(sink) => sink(&message),
            None => log::debug!(target: DIAGNOSTIC_LOG_TARGET, "{}", message),
        }
    }
}

// The API key and sink closure are kept out of debug output.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("client_name", &self.client_name)
            .field("endpoint", &self.endpoint)
            .field("app_version", &self.app_version)
            .field("protocol_version", &self.protocol_version)
            .field("debug", &self.debug)
            .field("extra_params", &self.extra_params)
            .field("diagnostic_sink", &self.diagnostic_sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::{PARAM_API_KEY, PARAM_CLIENT, PARAM_URL};
    use std::sync::Mutex;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("key", "client");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.app_version, "1.0.0");
        assert_eq!(config.protocol_version, "3.0");
        assert!(!config.debug);
        assert!(config.extra_params.is_empty());
        assert!(config.diagnostic_sink.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_requires_api_key() {
        let err = ClientConfig::new("", "client").validate().unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
        assert!(err.to_string().contains("API key is required"));

        let err = ClientConfig::new("   ", "client").validate().unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
    }

    #[test]
    fn test_config_requires_client_name() {
        let err = ClientConfig::new("key", "").validate().unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
        assert!(err.to_string().contains("Client name is required"));
    }

    #[test]
    fn test_config_rejects_relative_endpoint() {
        let err = ClientConfig::new("key", "client")
            .with_endpoint("/safebrowsing/api/lookup")
            .validate()
            .unwrap_err();
        assert!(matches!(err, LookupError::Configuration(_)));
    }

    #[test]
    fn test_config_rejects_reserved_params() {
        for key in [PARAM_CLIENT, PARAM_API_KEY, PARAM_URL] {
            let result = ClientConfig::new("key", "client")
                .with_param(key, "x")
                .validate();
            assert!(
                matches!(result, Err(LookupError::Configuration(_))),
                "reserved key '{}' should be rejected",
                key
            );
        }
        let result = ClientConfig::new("key", "client")
            .with_param("", "x")
            .validate();
        assert!(matches!(result, Err(LookupError::Configuration(_))));

        // Pushed directly, version keys would be sent twice.
        let mut config = ClientConfig::new("key", "client");
        config
            .extra_params
            .push((PARAM_APP_VERSION.to_string(), "9.9.9".to_string()));
        assert!(matches!(
            config.validate(),
            Err(LookupError::Configuration(_))
        ));
    }

    #[test]
    fn test_version_params_override_defaults() {
        let config = ClientConfig::new("key", "client")
            .with_param(PARAM_APP_VERSION, "2.5.0")
            .with_param(PARAM_PROTOCOL_VERSION, "3.1")
            .with_param("lang", "en");
        assert_eq!(config.app_version, "2.5.0");
        assert_eq!(config.protocol_version, "3.1");
        assert_eq!(
            config.extra_params,
            vec![("lang".to_string(), "en".to_string())]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_keeps_param_order() {
        let config = ClientConfig::new("key", "client")
            .with_param("zeta", "1")
            .with_param("alpha", "2");
        assert_eq!(
            config.extra_params,
            vec![
                ("zeta".to_string(), "1".to_string()),
                ("alpha".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = ClientConfig::new("super-secret", "client");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_diagnose_only_when_debug() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink_seen = Arc::clone(&seen);
        let sink: DiagnosticSink = Arc::new(move |msg: &str| {
            sink_seen.lock().unwrap().push(msg.to_string());
        });

        let quiet = ClientConfig::new("key", "client").with_diagnostic_sink(Arc::clone(&sink));
        quiet.diagnose(|| "hidden".to_string());
        assert!(seen.lock().unwrap().is_empty());

        let loud = quiet.with_debug(true);
        loud.diagnose(|| "shown".to_string());
        assert_eq!(*seen.lock().unwrap(), vec!["shown".to_string()]);
    }
}
