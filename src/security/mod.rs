//! Input validation for lookup targets.

pub mod url_validation;

pub use url_validation::{has_scheme_and_host, validate_lookup_url};
