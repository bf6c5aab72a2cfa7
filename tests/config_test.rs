// ABOUTME: Unit tests for environment-driven tracker configuration
// ABOUTME: Validates defaults, overrides, invalid values and secret redaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use liftlog::config::{StorageBackend, TrackerConfig};
use liftlog::errors::ErrorCode;
use liftlog::i18n::Language;
use serial_test::serial;

const VARS: [&str; 10] = [
    "LIFTLOG_STORAGE",
    "LIFTLOG_DATA_DIR",
    "LIFTLOG_TICK_MILLIS",
    "LIFTLOG_REST_SECONDS",
    "LIFTLOG_LANGUAGE",
    "LIFTLOG_WEIGHT_INCREMENT_KG",
    "LIFTLOG_REP_CEILING",
    "GEMINI_API_KEY",
    "LIFTLOG_AI_MODEL",
    "LIFTLOG_AI_BASE_URL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = TrackerConfig::from_env().unwrap();

    assert!(matches!(config.storage, StorageBackend::File(_)));
    assert_eq!(config.rest_seconds, 90);
    assert_eq!(config.tick_interval, Duration::from_secs(1));
    assert_eq!(config.language, Language::En);
    assert!((config.overload.weight_increment_kg - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.overload.rep_ceiling, 12);
    assert!(config.ai.api_key.is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("LIFTLOG_DATA_DIR", "/tmp/liftlog-test");
    env::set_var("LIFTLOG_REST_SECONDS", "120");
    env::set_var("LIFTLOG_TICK_MILLIS", "250");
    env::set_var("LIFTLOG_WEIGHT_INCREMENT_KG", "5");
    env::set_var("GEMINI_API_KEY", "secret-key");

    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(
        config.storage,
        StorageBackend::File(PathBuf::from("/tmp/liftlog-test"))
    );
    assert_eq!(config.rest_seconds, 120);
    assert_eq!(config.tick_interval, Duration::from_millis(250));
    assert!((config.overload.policy().weight_increment - 5.0).abs() < f64::EPSILON);
    assert_eq!(config.ai.api_key.as_deref(), Some("secret-key"));
    clear_env();
}

#[test]
#[serial]
fn test_memory_storage_selection() {
    clear_env();
    env::set_var("LIFTLOG_STORAGE", "memory");
    env::set_var("LIFTLOG_DATA_DIR", "/ignored");
    let config = TrackerConfig::from_env().unwrap();
    assert_eq!(config.storage, StorageBackend::Memory);
    clear_env();
}

#[test]
#[serial]
fn test_invalid_numbers_are_rejected() {
    clear_env();
    env::set_var("LIFTLOG_REST_SECONDS", "ninety");
    let err = TrackerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("LIFTLOG_REST_SECONDS"));

    clear_env();
    env::set_var("LIFTLOG_TICK_MILLIS", "0");
    let err = TrackerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}

#[test]
#[serial]
fn test_empty_api_key_counts_as_missing() {
    clear_env();
    env::set_var("GEMINI_API_KEY", "");
    assert!(TrackerConfig::from_env().unwrap().ai.api_key.is_none());
    clear_env();
}

#[test]
fn test_debug_output_redacts_api_key() {
    let mut config = TrackerConfig::in_memory();
    config.ai.api_key = Some("super-secret".to_owned());
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[REDACTED]"));
}

#[test]
fn test_non_positive_policy_values_fall_back_to_defaults() {
    let mut config = TrackerConfig::in_memory();
    config.overload.weight_increment_kg = -1.0;
    config.overload.rep_ceiling = 0;
    let policy = config.overload.policy();
    assert!((policy.weight_increment - 2.5).abs() < f64::EPSILON);
    assert_eq!(policy.rep_ceiling, 12);
}
