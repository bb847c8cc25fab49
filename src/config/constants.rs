//! Configuration constants.
//!
//! This module defines the defaults and limits used by the lookup client,
//! including the remote endpoint, protocol versions, and batch size limits.

/// Default lookup endpoint (Safe Browsing Lookup API v3).
pub const DEFAULT_ENDPOINT: &str = "https://sb-ssl.google.com/safebrowsing/api/lookup";

/// Default application version sent as `appver` (format: major.minor.patch).
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Default protocol version sent as `pver` (format: major.minor).
pub const DEFAULT_PROTOCOL_VERSION: &str = "3.0";

/// Maximum number of URLs accepted in a single batch lookup.
///
/// Checked against the raw input length, before invalid entries are dropped.
pub const MAX_URLS_PER_BATCH: usize = 500;

/// Per-request timeout for the HTTP transport in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent for the HTTP transport.
pub const DEFAULT_USER_AGENT: &str = concat!("safe_browse/", env!("CARGO_PKG_VERSION"));

/// Log target used by the diagnostic sink when no custom sink is installed.
pub const DIAGNOSTIC_LOG_TARGET: &str = "safe_browse::lookup";

/// Query key for the client name
pub const PARAM_CLIENT: &str = "client";
/// Query key for the API key
pub const PARAM_API_KEY: &str = "apikey";
/// Query key for the application version
pub const PARAM_APP_VERSION: &str = "appver";
/// Query key for the protocol version
pub const PARAM_PROTOCOL_VERSION: &str = "pver";
/// Query key for the single-mode target URL
pub const PARAM_URL: &str = "url";

/// Query keys owned by the client; `extra_params` may not contain them.
///
/// `ClientConfig::with_param` maps `appver` and `pver` onto the version fields.
pub const RESERVED_PARAMS: &[&str] = &[
    PARAM_CLIENT,
    PARAM_API_KEY,
    PARAM_APP_VERSION,
    PARAM_PROTOCOL_VERSION,
    PARAM_URL,
];

/// Remote status codes treated as call-level failures.
pub const API_ERROR_STATUSES: &[u16] = &[400, 401, 503];

/// Verdict reported for URLs the service has no match for.
pub const VERDICT_OK: &str = "ok";
