//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The `env_logger` backend for the `log` facade
//! - The HTTP client behind the default transport

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
