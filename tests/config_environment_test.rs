// ABOUTME: Tests for environment-driven configuration and logging settings
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use eatitude::config::environment::{default_data_dir, vars};
use eatitude::config::{EatitudeConfig, Environment, StorageBackend};
use eatitude::errors::ErrorCode;
use eatitude::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const ALL_VARS: [&str; 8] = [
    vars::API_URL,
    vars::API_TIMEOUT_SECS,
    vars::API_CONNECT_TIMEOUT_SECS,
    vars::PLAN_MAX_RETRIES,
    vars::PLAN_RETRY_DELAY_MS,
    vars::STORAGE_BACKEND,
    vars::DATA_DIR,
    vars::ENVIRONMENT,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
    for key in ["RUST_LOG", "LOG_FORMAT", "LOG_INCLUDE_LOCATION", "LOG_INCLUDE_THREAD", "LOG_INCLUDE_SPANS"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = EatitudeConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.plan_service.base_url, "http://localhost:8000");
    assert_eq!(config.plan_service.timeout, Duration::from_secs(300));
    assert_eq!(config.plan_service.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.plan_service.max_retries, 2);
    assert_eq!(config.plan_service.retry_delay, Duration::from_millis(60_000));
    assert_eq!(config.storage.backend, StorageBackend::File);
    assert_eq!(config.storage.data_dir, default_data_dir());
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var(vars::API_URL, "https://plans.example.com/");
    env::set_var(vars::API_TIMEOUT_SECS, "30");
    env::set_var(vars::PLAN_MAX_RETRIES, "0");
    env::set_var(vars::PLAN_RETRY_DELAY_MS, "250");
    env::set_var(vars::STORAGE_BACKEND, "memory");
    env::set_var(vars::DATA_DIR, "/tmp/eatitude-test");
    env::set_var(vars::ENVIRONMENT, "production");

    let config = EatitudeConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.plan_service.base_url, "https://plans.example.com");
    assert_eq!(config.plan_service.timeout, Duration::from_secs(30));
    assert_eq!(config.plan_service.max_retries, 0);
    assert_eq!(config.plan_service.retry_delay, Duration::from_millis(250));
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/eatitude-test"));
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    clear_env();
    env::set_var(vars::PLAN_MAX_RETRIES, "many");
    let error = EatitudeConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(vars::PLAN_MAX_RETRIES));

    clear_env();
    env::set_var(vars::API_URL, "ftp://plans.example.com");
    let error = EatitudeConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);

    clear_env();
    env::set_var(vars::STORAGE_BACKEND, "sqlite");
    let error = EatitudeConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_logging_config_from_environment() {
    clear_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);

    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "eatitude");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("anything"), LogFormat::Pretty);
}
