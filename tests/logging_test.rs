// ABOUTME: Integration tests for logging configuration
// ABOUTME: Covers defaults, environment parsing, verbosity, and filter validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_strength::logging::{LogFormat, LoggingConfig, SERVICE_NAME};
use serial_test::serial;

#[test]
fn test_default_logging_is_quiet_and_compact() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, SERVICE_NAME);
    assert!(!config.include_location);
}

#[test]
fn test_verbose_raises_level() {
    let config = LoggingConfig::default().verbose();

    assert_eq!(config.level, "debug");
    assert!(config.env_filter().is_ok());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        level: "pierre=loud[".to_owned(),
        ..LoggingConfig::default()
    };

    assert!(config.env_filter().is_err());
}

#[test]
#[serial]
fn test_from_env_reads_format_and_level() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "pierre_intelligence=trace");

    let config = LoggingConfig::from_env();

    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "pierre_intelligence=trace");
}
