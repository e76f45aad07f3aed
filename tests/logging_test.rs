// ABOUTME: Integration tests for structured logging configuration
// ABOUTME: Covers defaults, environment parsing, filters, and the configuration summary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;

use kibble_scorer::logging::{LogFormat, LoggingConfig, DEFAULT_SERVICE_NAME};

const LOGGING_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn clear_env() {
    for key in LOGGING_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    assert_eq!(config.environment, "development");
    assert!(!config.include_location);
    assert!(!config.include_thread);
    assert!(!config.include_spans);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default(" compact "), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    assert_eq!(LogFormat::Json.to_string(), "json");
}

#[test]
#[serial]
fn test_from_env_in_development() {
    clear_env();
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("LOG_INCLUDE_THREAD", "1");
    env::set_var("SERVICE_NAME", "kibble-batch");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.include_thread);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "kibble-batch");
}

#[test]
#[serial]
fn test_production_enables_detail() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert!(config.include_spans);
}

#[test]
#[serial]
fn test_env_filter_includes_crate_directives() {
    clear_env();
    let filter = LoggingConfig::default()
        .with_level("warn")
        .env_filter()
        .to_string()
        .to_lowercase();
    assert!(filter.contains("kibble_intelligence=warn"), "{filter}");
    assert!(filter.contains("kibble_core=warn"), "{filter}");
}

#[test]
fn test_summary_reports_features() {
    let config = LoggingConfig {
        include_spans: true,
        ..LoggingConfig::default()
    };
    let summary = config.summary();
    assert_eq!(summary["service"]["name"], DEFAULT_SERVICE_NAME);
    assert_eq!(summary["logging"]["format"], "pretty");
    assert_eq!(summary["logging"]["features"]["spans"], true);
    assert_eq!(summary["logging"]["features"]["location"], false);
}
