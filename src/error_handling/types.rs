//! Error type definitions.
//!
//! This module defines all error types used throughout the library.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::MAX_URLS_PER_BATCH;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised by a [`crate::Transport`] implementation.
///
/// These are surfaced to callers unchanged through [`LookupError::Transport`].
#[derive(Error, Debug)]
pub enum TransportError {
    /// The underlying HTTP client failed (connection, timeout, body decoding).
    #[error("HTTP transport error: {0}")]
    Http(#[from] ReqwestError),

    /// Failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Other(String),
}

/// Errors produced by a lookup.
///
/// Configuration and input errors are returned before any request is sent;
/// `ApiResponse`, `Transport` and `MalformedResponse` come back after dispatch.
/// Nothing is retried.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Missing or invalid client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The lookup target is empty or not a URL with a scheme and host.
    #[error("Specified URL is not a valid one. Refer to the documentation for valid URLs: {0}")]
    InvalidUrl(String),

    /// A batch lookup exceeded the URL limit.
    #[error("Total number of URLs has exceeded the maximum allowed limit of {max} (got {count})")]
    TooManyUrls {
        /// Raw number of URLs supplied
        count: usize,
        /// Maximum allowed per batch
        max: usize,
    },

    /// Every entry of a batch lookup was invalid.
    #[error("No URL to look up, check the supplied list whether it contains valid URLs or not")]
    NoValidUrl,

    /// The service rejected the request (400, 401 or 503).
    #[error("Lookup API responded with {status}: {message}")]
    ApiResponse {
        /// Remote HTTP status code
        status: u16,
        /// Remote status line
        message: String,
    },

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A batch response did not carry one verdict line per submitted URL.
    #[error("Malformed lookup response: expected {expected} verdict lines, received {received}")]
    MalformedResponse {
        /// Number of URLs submitted
        expected: usize,
        /// Number of verdict lines received
        received: usize,
    },
}

impl LookupError {
    /// Builds a `TooManyUrls` error against the batch limit.
    pub(crate) fn too_many(count: usize) -> Self {
        LookupError::TooManyUrls {
            count,
            max: MAX_URLS_PER_BATCH,
        }
    }

    /// Returns the remote status code for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::ApiResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for errors raised before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LookupError::Configuration(_)
                | LookupError::InvalidUrl(_)
                | LookupError::TooManyUrls { .. }
                | LookupError::NoValidUrl
        )
    }
}
