//! URL validation for lookup targets.
//!
//! The lookup service only accepts absolute URLs. A target qualifies when it
//! parses into a scheme and a non-empty host; anything else (relative paths,
//! `mailto:` style URLs, `file:///` paths, bare words) is rejected before a
//! request is built.

use url::Url;

use crate::error_handling::LookupError;

/// Returns `true` if the string parses into a scheme and a host.
///
/// # Examples
///
/// ```
/// use safe_browse::security::url_validation::has_scheme_and_host;
///
/// assert!(has_scheme_and_host("http://example.com"));
/// assert!(has_scheme_and_host("https://example.com:8443/path?q=1"));
///
/// assert!(!has_scheme_and_host("/invalid/url/scheme"));
/// assert!(!has_scheme_and_host("mailto:someone@example.com"));
/// assert!(!has_scheme_and_host(""));
/// ```
pub fn has_scheme_and_host(url_str: &str) -> bool {
    if url_str.is_empty() {
        return false;
    }
    match Url::parse(url_str) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Validates a single-mode lookup target.
///
/// # Errors
///
/// Returns `LookupError::InvalidUrl` if the string is empty or lacks a scheme
/// or host.
pub fn validate_lookup_url(url_str: &str) -> Result<(), LookupError> {
    if has_scheme_and_host(url_str) {
        Ok(())
    } else {
        Err(LookupError::InvalidUrl(url_str.to_string()))
    }
}
