//! Command-line options for the `safe_browse` binary.

use clap::Parser;

use crate::config::constants::{
    DEFAULT_APP_VERSION, DEFAULT_ENDPOINT, DEFAULT_PROTOCOL_VERSION, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use crate::config::types::{ClientConfig, LogFormat, LogLevel};
use crate::lookup::LookupTarget;

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Single URL (GET)
/// SAFE_BROWSE_API_KEY=... safe_browse http://example.com
///
/// # Several URLs in one batch (POST), JSON output
/// safe_browse --api-key ... --json http://a.com http://b.com
///
/// # Trace every request stage
/// safe_browse --debug --log-level debug http://example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "safe_browse",
    version,
    about = "Checks URLs against the Safe Browsing lookup API for malware and phishing."
)]
pub struct Opt {
    /// URLs to look up; more than one selects batch mode
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Send a batch request even for a single URL
    #[arg(long)]
    pub batch: bool,

    /// API key
    #[arg(long, env = "SAFE_BROWSE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Client name reported to the service
    #[arg(long, env = "SAFE_BROWSE_CLIENT", default_value = "safe_browse")]
    pub client_name: String,

    /// Lookup endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Application version sent as `appver`
    #[arg(long, default_value = DEFAULT_APP_VERSION)]
    pub app_version: String,

    /// Protocol version sent as `pver`
    #[arg(long, default_value = DEFAULT_PROTOCOL_VERSION)]
    pub protocol_version: String,

    /// Extra query parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log every lookup stage (visible with --log-level debug)
    #[arg(long)]
    pub debug: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the client configuration from the options.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(
            self.api_key.clone().unwrap_or_default(),
            self.client_name.clone(),
        )
        .with_endpoint(self.endpoint.clone())
        .with_app_version(self.app_version.clone())
        .with_protocol_version(self.protocol_version.clone())
        .with_debug(self.debug);

        self.params
            .iter()
            .fold(config, |config, (k, v)| config.with_param(k.clone(), v.clone()))
    }

    /// Lookup target: a single URL unless several were given or `--batch` is set.
    pub fn target(&self) -> LookupTarget {
        match self.urls.as_slice() {
            [url] if !self.batch => LookupTarget::Single(url.clone()),
            urls => LookupTarget::Batch(urls.to_vec()),
        }
    }
}

/// Parses `key=value`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value pair: no '=' found in '{}'", s))?;
    if key.is_empty() {
        return Err(format!("invalid key=value pair: empty key in '{}'", s));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("lang=en"),
            Ok(("lang".to_string(), "en".to_string()))
        );
        assert_eq!(
            parse_key_val("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_key_val("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("=x").is_err());
    }
}
