//! Error handling.
//!
//! This module provides the error types for:
//! - Lookup failures (configuration, input validation, API responses)
//! - Transport failures, passed through unchanged
//! - Logger and HTTP client initialization

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError, TransportError};
