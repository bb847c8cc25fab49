//! Request construction.
//!
//! Turns a [`LookupTarget`] into a [`LookupRequest`]: validates the input,
//! selects single (GET) or batch (POST) mode, and renders the query string and
//! body in the lookup API wire format.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{
    ClientConfig, MAX_URLS_PER_BATCH, PARAM_API_KEY, PARAM_APP_VERSION, PARAM_CLIENT,
    PARAM_PROTOCOL_VERSION, PARAM_URL,
};
use crate::error_handling::LookupError;
use crate::security::{has_scheme_and_host, validate_lookup_url};

/// RFC 3986 component encoding: only unreserved characters stay literal.
///
/// Unlike `application/x-www-form-urlencoded` encoders, this escapes
/// `! * ( ) '` and encodes space as `%20`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Placeholder for the API key in diagnostics; unreserved characters only.
const REDACTED: &str = "REDACTED";

/// What to look up: one URL or a list of URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTarget {
    /// One URL, sent as a GET query parameter
    Single(String),
    /// Several URLs, sent as a POST body
    Batch(Vec<String>),
}

impl From<&str> for LookupTarget {
    fn from(url: &str) -> Self {
        LookupTarget::Single(url.to_string())
    }
}

impl From<String> for LookupTarget {
    fn from(url: String) -> Self {
        LookupTarget::Single(url)
    }
}

impl From<&String> for LookupTarget {
    fn from(url: &String) -> Self {
        LookupTarget::Single(url.clone())
    }
}

impl From<Vec<String>> for LookupTarget {
    fn from(urls: Vec<String>) -> Self {
        LookupTarget::Batch(urls)
    }
}

impl From<Vec<&str>> for LookupTarget {
    fn from(urls: Vec<&str>) -> Self {
        LookupTarget::Batch(urls.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for LookupTarget {
    fn from(urls: &[&str]) -> Self {
        LookupTarget::Batch(urls.iter().map(|u| u.to_string()).collect())
    }
}

impl From<&[String]> for LookupTarget {
    fn from(urls: &[String]) -> Self {
        LookupTarget::Batch(urls.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for LookupTarget {
    fn from(urls: [&str; N]) -> Self {
        LookupTarget::Batch(urls.iter().map(|u| u.to_string()).collect())
    }
}

/// Request mode and the URLs it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMode {
    /// One validated URL
    Single(String),
    /// Sorted, deduplicated, validated URLs in submission order
    Batch(Vec<String>),
}

/// A fully built lookup request, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    mode: LookupMode,
    url: String,
    body: Option<String>,
}

impl LookupRequest {
    /// Request mode.
    pub fn mode(&self) -> &LookupMode {
        &self.mode
    }

    /// Returns `true` for batch (POST) requests.
    pub fn is_batch(&self) -> bool {
        matches!(self.mode, LookupMode::Batch(_))
    }

    /// URLs sent to the service, in submission order.
    pub fn urls(&self) -> &[String] {
        match &self.mode {
            LookupMode::Single(url) => std::slice::from_ref(url),
            LookupMode::Batch(urls) => urls,
        }
    }

    /// Endpoint URL including the query string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST body for batch requests.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Percent-encodes a query component with the strict RFC 3986 set.
///
/// # Examples
///
/// ```
/// use safe_browse::lookup::encode_component;
///
/// assert_eq!(encode_component("it's (fine)!*"), "it%27s%20%28fine%29%21%2A");
/// assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
/// ```
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Validates `target` and builds the request for it.
///
/// # Errors
///
/// - `InvalidUrl` for an empty target, an empty list, or a single URL without
///   scheme and host
/// - `TooManyUrls` when a list is longer than [`MAX_URLS_PER_BATCH`]
/// - `NoValidUrl` when no list entry survives validation
pub fn build_request(
    config: &ClientConfig,
    target: LookupTarget,
) -> Result<LookupRequest, LookupError> {
    match target {
        LookupTarget::Single(url) => build_single(config, url),
        LookupTarget::Batch(urls) => build_batch(config, urls),
    }
}

fn build_single(config: &ClientConfig, url: String) -> Result<LookupRequest, LookupError> {
    config.diagnose(|| "Request type: GET".to_string());
    validate_lookup_url(&url)?;

    let request_url = render_request_url(config, Some(&url), &config.api_key);
    config.diagnose(|| {
        format!(
            "URL to be looked up: {}",
            render_request_url(config, Some(&url), REDACTED)
        )
    });

    Ok(LookupRequest {
        mode: LookupMode::Single(url),
        url: request_url,
        body: None,
    })
}

fn build_batch(config: &ClientConfig, mut urls: Vec<String>) -> Result<LookupRequest, LookupError> {
    config.diagnose(|| "Request type: POST".to_string());

    if urls.is_empty() {
        return Err(LookupError::InvalidUrl(String::new()));
    }
    // Limit applies to the raw input, before anything is dropped.
    if urls.len() > MAX_URLS_PER_BATCH {
        return Err(LookupError::too_many(urls.len()));
    }

    // Verdict lines come back in submission order, so the order must be stable.
    urls.sort();

    let raw_count = urls.len();
    urls.retain(|u| has_scheme_and_host(u));
    if urls.is_empty() {
        return Err(LookupError::NoValidUrl);
    }
    let dropped = raw_count - urls.len();
    if dropped > 0 {
        config.diagnose(|| format!("Discarded {} invalid URL(s)", dropped));
    }

    urls.dedup();

    let body = render_batch_body(&urls);
    let request_url = render_request_url(config, None, &config.api_key);
    config.diagnose(|| {
        format!(
            "Request URI:\n {}",
            render_request_url(config, None, REDACTED)
        )
    });
    config.diagnose(|| format!("Request Body:\n {}", body));
    config.diagnose(|| {
        format!(
            "Total URLs to look up after processing: {}",
            urls.len()
        )
    });

    Ok(LookupRequest {
        mode: LookupMode::Batch(urls),
        url: request_url,
        body: Some(body),
    })
}

/// Batch body: URL count on the first line, then one URL per line.
fn render_batch_body(urls: &[String]) -> String {
    let mut lines = Vec::with_capacity(urls.len() + 1);
    lines.push(urls.len().to_string());
    lines.extend(urls.iter().cloned());
    lines.join("\n")
}

/// Renders `endpoint?client=..&apikey=..&appver=..&pver=..[&extra..][&url=..]`.
fn render_request_url(config: &ClientConfig, url: Option<&str>, api_key: &str) -> String {
    let mut params: Vec<(&str, &str)> = vec![
        (PARAM_CLIENT, config.client_name.as_str()),
        (PARAM_API_KEY, api_key),
        (PARAM_APP_VERSION, config.app_version.as_str()),
        (PARAM_PROTOCOL_VERSION, config.protocol_version.as_str()),
    ];
    params.extend(
        config
            .extra_params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str())),
    );
    if let Some(url) = url {
        params.push((PARAM_URL, url));
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if config.endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", config.endpoint, separator, query)
}
