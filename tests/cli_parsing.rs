//! Tests for CLI option parsing.

use clap::Parser;
use safe_browse::config::{LogFormat, LogLevel, Opt, DEFAULT_ENDPOINT};
use safe_browse::LookupTarget;

#[test]
fn test_cli_single_url_defaults() {
    let args = ["safe_browse", "--api-key", "k", "http://example.com"];
    let opt = Opt::try_parse_from(args.iter()).expect("Should parse single URL");

    assert_eq!(opt.urls, vec!["http://example.com".to_string()]);
    assert_eq!(opt.api_key.as_deref(), Some("k"));
    assert_eq!(opt.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(opt.app_version, "1.0.0");
    assert_eq!(opt.protocol_version, "3.0");
    assert_eq!(opt.timeout_seconds, 10);
    assert!(!opt.debug);
    assert!(!opt.json);
    assert!(opt.params.is_empty());
    // LogLevel and LogFormat don't implement PartialEq, so we compare via conversion
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::from(LogLevel::Warn)
    );
    match opt.log_format {
        LogFormat::Plain => {}
        _ => panic!("Should be Plain format"),
    }
    assert_eq!(
        opt.target(),
        LookupTarget::Single("http://example.com".to_string())
    );
}

#[test]
fn test_cli_multiple_urls_select_batch() {
    let args = ["safe_browse", "http://b.com", "http://a.com"];
    let opt = Opt::try_parse_from(args.iter()).expect("Should parse URLs");

    assert_eq!(
        opt.target(),
        LookupTarget::Batch(vec!["http://b.com".to_string(), "http://a.com".to_string()])
    );
}

#[test]
fn test_cli_batch_flag_forces_batch() {
    let args = ["safe_browse", "--batch", "http://a.com"];
    let opt = Opt::try_parse_from(args.iter()).expect("Should parse --batch");

    assert_eq!(
        opt.target(),
        LookupTarget::Batch(vec!["http://a.com".to_string()])
    );
}

#[test]
fn test_cli_requires_a_url() {
    let args = ["safe_browse", "--api-key", "k"];
    assert!(Opt::try_parse_from(args.iter()).is_err());
}

#[test]
fn test_cli_options_flow_into_client_config() {
    let args = vec![
        "safe_browse",
        "--api-key",
        "secret",
        "--client-name",
        "scanner",
        "--endpoint",
        "https://lookup.test/api",
        "--app-version",
        "2.0.0",
        "--protocol-version",
        "3.1",
        "--param",
        "lang=en",
        "--param",
        "region=eu",
        "--debug",
        "--json",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "http://example.com",
    ];
    let opt = Opt::try_parse_from(args.iter()).expect("Should parse all options");

    assert!(opt.json);
    assert_eq!(
        log::LevelFilter::from(opt.log_level.clone()),
        log::LevelFilter::Debug
    );
    match opt.log_format {
        LogFormat::Json => {}
        _ => panic!("Should be Json format"),
    }

    let config = opt.client_config();
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.client_name, "scanner");
    assert_eq!(config.endpoint, "https://lookup.test/api");
    assert_eq!(config.app_version, "2.0.0");
    assert_eq!(config.protocol_version, "3.1");
    assert!(config.debug);
    assert_eq!(
        config.extra_params,
        vec![
            ("lang".to_string(), "en".to_string()),
            ("region".to_string(), "eu".to_string())
        ]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_rejects_malformed_param() {
    let args = ["safe_browse", "--param", "novalue", "http://a.com"];
    assert!(Opt::try_parse_from(args.iter()).is_err());
}
