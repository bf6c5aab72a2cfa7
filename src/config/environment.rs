// ABOUTME: Environment-based configuration for storage, timing, overload policy, language and AI
// ABOUTME: Every value has a default; malformed numeric values are reported as config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use liftlog_core::constants::{
    clock::TICK_INTERVAL_MS,
    training::{DEFAULT_REP_CEILING, DEFAULT_REST_SECONDS, DEFAULT_WEIGHT_INCREMENT_KG},
};
use liftlog_intelligence::OverloadPolicy;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::i18n::Language;

/// Default Gemini model for plan generation
const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API base URL
const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Where session data is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// JSON files under a data directory
    File(PathBuf),
    /// Process memory only; nothing survives a restart
    Memory,
}

/// Progressive overload policy knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverloadConfig {
    /// Kilograms added when progressing by weight
    pub weight_increment_kg: f64,
    /// Rep count at which progression switches to weight
    pub rep_ceiling: u32,
}

impl Default for OverloadConfig {
    fn default() -> Self {
        Self {
            weight_increment_kg: DEFAULT_WEIGHT_INCREMENT_KG,
            rep_ceiling: DEFAULT_REP_CEILING,
        }
    }
}

impl OverloadConfig {
    /// Build the policy used by the history tracker
    #[must_use]
    pub fn policy(&self) -> OverloadPolicy {
        OverloadPolicy::new(self.weight_increment_kg, self.rep_ceiling)
    }
}

/// Remote plan generator settings
#[derive(Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// API key; generation is unavailable without one
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// API base URL
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_AI_MODEL.to_owned(),
            base_url: DEFAULT_AI_BASE_URL.to_owned(),
        }
    }
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Complete tracker configuration
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Persistence backend
    pub storage: StorageBackend,
    /// Rest interval started when a set is completed
    pub rest_seconds: u32,
    /// Clock tick period
    pub tick_interval: Duration,
    /// Display language
    pub language: Language,
    /// Overload policy
    pub overload: OverloadConfig,
    /// Plan generator
    pub ai: AiConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::File(default_data_dir()),
            rest_seconds: DEFAULT_REST_SECONDS,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            language: Language::default(),
            overload: OverloadConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// In-memory configuration with defaults, used by tests and demos
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let storage = match env::var("LIFTLOG_STORAGE").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            _ => StorageBackend::File(
                env::var("LIFTLOG_DATA_DIR").map_or_else(|_| default_data_dir(), PathBuf::from),
            ),
        };

        let tick_millis: u64 = parse_env("LIFTLOG_TICK_MILLIS", TICK_INTERVAL_MS)?;
        if tick_millis == 0 {
            return Err(AppError::config_invalid(
                "LIFTLOG_TICK_MILLIS must be greater than zero",
            ));
        }

        let config = Self {
            storage,
            rest_seconds: parse_env("LIFTLOG_REST_SECONDS", DEFAULT_REST_SECONDS)?,
            tick_interval: Duration::from_millis(tick_millis),
            language: parse_env("LIFTLOG_LANGUAGE", Language::default())?,
            overload: OverloadConfig {
                weight_increment_kg: parse_env(
                    "LIFTLOG_WEIGHT_INCREMENT_KG",
                    DEFAULT_WEIGHT_INCREMENT_KG,
                )?,
                rep_ceiling: parse_env("LIFTLOG_REP_CEILING", DEFAULT_REP_CEILING)?,
            },
            ai: AiConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
                model: env_var_or("LIFTLOG_AI_MODEL", DEFAULT_AI_MODEL),
                base_url: env_var_or("LIFTLOG_AI_BASE_URL", DEFAULT_AI_BASE_URL),
            },
        };

        info!(
            storage = ?config.storage,
            rest_seconds = config.rest_seconds,
            language = %config.language,
            "Configuration loaded"
        );
        Ok(config)
    }
}

/// Platform data directory for Liftlog, falling back to the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".liftlog"), |dir| dir.join("liftlog"))
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when it is unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
