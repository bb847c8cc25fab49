//! safe_browse library: URL reputation lookups
//!
//! This library checks URLs against a remote lookup service (Safe Browsing
//! Lookup API v3 wire format) and reports, per URL, whether it is flagged as
//! malware or phishing, or clean ("ok").
//!
//! A single URL is sent as a GET request; a list of URLs is sorted,
//! deduplicated and sent as one POST request whose verdicts come back line by
//! line in submission order.
//!
//! # Example
//!
//! ```no_run
//! use safe_browse::{ClientConfig, HttpTransport, LookupClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("your-api-key", "my-app").with_app_version("1.2.0");
//! let client = LookupClient::new(config, HttpTransport::new(10, "my-app/1.2.0")?)?;
//!
//! let result = client.lookup("http://example.com").await?;
//! println!("example.com: {}", result.verdicts["http://example.com"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async. [`HttpTransport`] and [`events::spawn_lookup`] require a
//! Tokio runtime; custom [`Transport`] implementations can use any executor.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod events;
pub mod initialization;
pub mod lookup;
pub mod security;
mod transport;

// Re-export public API
pub use config::{ClientConfig, DiagnosticSink, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError, TransportError};
pub use events::{spawn_lookup, spawn_lookup_with, LookupEvent};
pub use lookup::{LookupClient, LookupMode, LookupRequest, LookupResult, LookupTarget, Verdict};
pub use transport::{HttpTransport, Transport, TransportResponse};
