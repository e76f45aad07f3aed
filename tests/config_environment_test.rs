// ABOUTME: Integration tests for environment-driven scorer configuration
// ABOUTME: Verifies defaults, scoring overrides, and configuration error mapping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;

use kibble_scorer::config::{Environment, LogLevel, ScorerConfig};
use kibble_scorer::errors::ErrorCode;
use kibble_scorer::logging::LogFormat;

const SCORING_VARS: &[&str] = &[
    "KIBBLE_SAFETY_GATE_THRESHOLD",
    "KIBBLE_UNSAFE_SCORE_CAP",
    "KIBBLE_PERFECT_MATCH_BONUS",
    "KIBBLE_CALIBRATION_PERFECT_TARGET",
    "KIBBLE_CALIBRATION_NO_PERFECT_TARGET",
];

fn clear_env() {
    for key in SCORING_VARS {
        env::remove_var(key);
    }
    for key in ["ENVIRONMENT", "RUST_LOG", "LOG_FORMAT"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = ScorerConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!((config.scoring.gate.threshold - 60.0).abs() < f64::EPSILON);
    assert!((config.scoring.calibration.no_perfect_target - 92.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_scoring_overrides_are_applied() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("KIBBLE_SAFETY_GATE_THRESHOLD", "55");
    env::set_var("KIBBLE_PERFECT_MATCH_BONUS", " 4 ");
    env::set_var("KIBBLE_CALIBRATION_NO_PERFECT_TARGET", "90");

    let config = ScorerConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!((config.scoring.gate.threshold - 55.0).abs() < f64::EPSILON);
    assert!((config.scoring.bonuses.perfect_match_bonus - 4.0).abs() < f64::EPSILON);
    assert!((config.scoring.calibration.no_perfect_target - 90.0).abs() < f64::EPSILON);
    assert!(config.summary().contains("Safety Gate Threshold: 55"));
}

#[test]
#[serial]
fn test_malformed_override_is_a_configuration_error() {
    clear_env();
    env::set_var("KIBBLE_UNSAFE_SCORE_CAP", "forty");
    let err = ScorerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigurationError);
    assert!(err.message.contains("KIBBLE_UNSAFE_SCORE_CAP"), "{}", err.message);
}

#[test]
#[serial]
fn test_out_of_range_override_is_rejected() {
    clear_env();
    env::set_var("KIBBLE_CALIBRATION_PERFECT_TARGET", "140");
    let err = ScorerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigurationError);
}

#[test]
#[serial]
fn test_with_log_level_updates_logging() {
    clear_env();
    let config = ScorerConfig::from_env().unwrap().with_log_level(LogLevel::Debug);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.logging.level, "debug");
}
