//! Response interpretation.
//!
//! Classifies the remote status and maps the mode-specific body shape onto a
//! uniform URL → verdict map.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::{API_ERROR_STATUSES, VERDICT_OK};
use crate::error_handling::LookupError;
use crate::lookup::request::{LookupMode, LookupRequest};
use crate::transport::TransportResponse;

const STATUS_NO_CONTENT: u16 = 204;

/// Classification string returned by the service for one URL.
///
/// The raw value is kept as sent ("ok", "malware", "phishing",
/// "malware,phishing"); [`Verdict::categories`] offers a split view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Verdict(String);

impl Verdict {
    /// Verdict for a URL with no match.
    pub fn ok() -> Self {
        Verdict(VERDICT_OK.to_string())
    }

    /// Wraps a raw verdict string.
    pub fn new(raw: impl Into<String>) -> Self {
        Verdict(raw.into())
    }

    /// Raw verdict string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the URL is not flagged.
    pub fn is_ok(&self) -> bool {
        self.0 == VERDICT_OK
    }

    /// Threat categories, split on commas. Empty for "ok".
    ///
    /// ```
    /// use safe_browse::Verdict;
    ///
    /// let verdict = Verdict::new("malware,phishing");
    /// assert_eq!(verdict.categories().collect::<Vec<_>>(), ["malware", "phishing"]);
    /// assert_eq!(Verdict::ok().categories().count(), 0);
    /// ```
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        let raw = if self.is_ok() { "" } else { self.0.as_str() };
        raw.split(',').map(str::trim).filter(|c| !c.is_empty())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Verdict {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Verdict {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// Remote HTTP status (normally 200 or 204)
    pub status_code: u16,
    /// One verdict per submitted URL, keyed by the URL as submitted
    pub verdicts: BTreeMap<String, Verdict>,
}

impl LookupResult {
    /// Verdict for `url`, if it was submitted.
    pub fn verdict(&self, url: &str) -> Option<&Verdict> {
        self.verdicts.get(url)
    }

    /// URLs whose verdict is not "ok".
    pub fn flagged(&self) -> impl Iterator<Item = (&str, &Verdict)> {
        self.verdicts
            .iter()
            .filter(|(_, v)| !v.is_ok())
            .map(|(u, v)| (u.as_str(), v))
    }

    /// Returns `true` if no URL was flagged.
    pub fn all_ok(&self) -> bool {
        self.verdicts.values().all(Verdict::is_ok)
    }
}

/// Maps a transport response onto a result for `request`.
///
/// # Errors
///
/// - `ApiResponse` for status 400, 401 or 503
/// - `MalformedResponse` when a batch body does not have one line per URL
pub fn interpret_response(
    request: &LookupRequest,
    response: TransportResponse,
) -> Result<LookupResult, LookupError> {
    if API_ERROR_STATUSES.contains(&response.status) {
        let message = if response.status_text.is_empty() {
            TransportResponse::new(response.status, "").status_text
        } else {
            response.status_text
        };
        return Err(LookupError::ApiResponse {
            status: response.status,
            message,
        });
    }

    let verdicts = match request.mode() {
        LookupMode::Single(url) => parse_single(url, response.status, &response.body),
        LookupMode::Batch(urls) => parse_batch(urls, response.status, &response.body)?,
    };

    Ok(LookupResult {
        status_code: response.status,
        verdicts,
    })
}

fn parse_single(url: &str, status: u16, body: &str) -> BTreeMap<String, Verdict> {
    let verdict = if status == STATUS_NO_CONTENT {
        Verdict::ok()
    } else {
        Verdict::new(strip_trailing_newline(body))
    };
    BTreeMap::from([(url.to_string(), verdict)])
}

fn parse_batch(
    urls: &[String],
    status: u16,
    body: &str,
) -> Result<BTreeMap<String, Verdict>, LookupError> {
    if status == STATUS_NO_CONTENT {
        return Ok(urls.iter().map(|u| (u.clone(), Verdict::ok())).collect());
    }

    // The service does not echo URLs: line N is the verdict for URL N.
    let lines: Vec<&str> = strip_trailing_newline(body)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() != urls.len() {
        return Err(LookupError::MalformedResponse {
            expected: urls.len(),
            received: lines.len(),
        });
    }

    Ok(urls
        .iter()
        .zip(lines)
        .map(|(url, line)| (url.clone(), Verdict::new(line)))
        .collect())
}

/// Removes one trailing `\n` or `\r\n`.
fn strip_trailing_newline(body: &str) -> &str {
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body)
}
