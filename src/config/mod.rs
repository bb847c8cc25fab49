//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, protocol versions, limits)
//! - The immutable per-client configuration value
//! - Logging option types and command-line options for the binary

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use cli::Opt;
pub use types::{ClientConfig, DiagnosticSink, LogFormat, LogLevel};
