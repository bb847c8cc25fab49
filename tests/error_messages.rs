//! Tests to ensure error messages are actionable and consistent
//!
//! These tests verify that errors surfaced through the public API tell the
//! caller what went wrong and, where relevant, the limit that was hit.

use safe_browse::{ClientConfig, HttpTransport, LookupClient, LookupError};

fn client() -> LookupClient {
    let transport = HttpTransport::new(1, "safe_browse_test/1.0").expect("transport");
    LookupClient::new(
        ClientConfig::new("key", "client").with_endpoint("http://127.0.0.1:9/lookup"),
        transport,
    )
    .expect("valid config")
}

#[test]
fn test_configuration_errors_name_the_missing_field() {
    let transport = HttpTransport::new(1, "safe_browse_test/1.0").expect("transport");
    let err = LookupClient::new(ClientConfig::new("", "client"), transport.clone()).unwrap_err();
    assert!(err.to_string().contains("API key"), "got: {}", err);

    let err = LookupClient::new(ClientConfig::new("key", " "), transport.clone()).unwrap_err();
    assert!(err.to_string().contains("Client name"), "got: {}", err);

    let err = LookupClient::new(
        ClientConfig::new("key", "client").with_param("apikey", "other"),
        transport,
    )
    .unwrap_err();
    assert!(err.to_string().contains("'apikey'"), "got: {}", err);
}

#[test]
fn test_invalid_url_error_includes_input() {
    let err = client().prepare("/invalid/url/scheme").unwrap_err();
    assert!(err.is_validation());
    let message = err.to_string();
    assert!(message.contains("Specified URL is not a valid one"));
    assert!(message.contains("/invalid/url/scheme"));
}

#[test]
fn test_too_many_urls_error_mentions_limit() {
    let urls: Vec<String> = (0..501).map(|i| format!("http://host{}.com", i)).collect();
    let err = client().prepare(urls).unwrap_err();
    assert!(matches!(err, LookupError::TooManyUrls { .. }));
    let message = err.to_string();
    assert!(message.contains("500"), "got: {}", message);
    assert!(message.contains("501"), "got: {}", message);
}

#[test]
fn test_no_valid_url_error_is_actionable() {
    let err = client()
        .prepare(vec!["/invalid/url/scheme", "/invalid/url/scheme1"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "No URL to look up, check the supplied list whether it contains valid URLs or not"
    );
}
