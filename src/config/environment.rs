// ABOUTME: Environment configuration for the plan service client and local storage
// ABOUTME: Parses EATITUDE_* variables into typed settings with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::api;
use crate::errors::{AppError, AppResult};

/// Environment variable names
pub mod vars {
    /// Base URL of the plan service
    pub const API_URL: &str = "EATITUDE_API_URL";
    /// Request timeout in seconds
    pub const API_TIMEOUT_SECS: &str = "EATITUDE_API_TIMEOUT_SECS";
    /// Connection timeout in seconds
    pub const API_CONNECT_TIMEOUT_SECS: &str = "EATITUDE_API_CONNECT_TIMEOUT_SECS";
    /// Extra generation attempts after a failure
    pub const PLAN_MAX_RETRIES: &str = "EATITUDE_PLAN_MAX_RETRIES";
    /// Delay between generation attempts in milliseconds
    pub const PLAN_RETRY_DELAY_MS: &str = "EATITUDE_PLAN_RETRY_DELAY_MS";
    /// Storage backend (`file` or `memory`)
    pub const STORAGE_BACKEND: &str = "EATITUDE_STORAGE_BACKEND";
    /// Directory holding the file store
    pub const DATA_DIR: &str = "EATITUDE_DATA_DIR";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where app state is persisted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file under the data directory
    #[default]
    File,
    /// Process memory, lost on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::config_invalid(format!(
                "{}: unsupported storage backend '{other}' (expected 'file' or 'memory')",
                vars::STORAGE_BACKEND
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Remote plan service client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanServiceConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Extra attempts after a failed generation
    pub max_retries: u32,
    /// Fixed delay between attempts
    pub retry_delay: Duration,
}

impl Default for PlanServiceConfig {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(api::DEFAULT_CONNECT_TIMEOUT_SECS),
            max_retries: api::DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(api::DEFAULT_RETRY_DELAY_MS),
        }
    }
}

/// Local persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: default_data_dir(),
        }
    }
}

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EatitudeConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Plan service client
    pub plan_service: PlanServiceConfig,
    /// Local persistence
    pub storage: StorageConfig,
}

impl EatitudeConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is set but cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(vars::ENVIRONMENT)
            .map_or_else(|_| Environment::default(), |value| Environment::from_str_or_default(&value));

        let base_url = env::var(vars::API_URL).unwrap_or_else(|_| api::DEFAULT_BASE_URL.to_owned());
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config_invalid(format!(
                "{}: expected an http(s) URL, got '{base_url}'",
                vars::API_URL
            )));
        }

        let plan_service = PlanServiceConfig {
            base_url,
            timeout: Duration::from_secs(parse_env_or(
                vars::API_TIMEOUT_SECS,
                api::DEFAULT_TIMEOUT_SECS,
            )?),
            connect_timeout: Duration::from_secs(parse_env_or(
                vars::API_CONNECT_TIMEOUT_SECS,
                api::DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            max_retries: parse_env_or(vars::PLAN_MAX_RETRIES, api::DEFAULT_MAX_RETRIES)?,
            retry_delay: Duration::from_millis(parse_env_or(
                vars::PLAN_RETRY_DELAY_MS,
                api::DEFAULT_RETRY_DELAY_MS,
            )?),
        };

        let storage = StorageConfig {
            backend: env::var(vars::STORAGE_BACKEND)
                .map_or(Ok(StorageBackend::default()), |value| value.parse())?,
            data_dir: env::var(vars::DATA_DIR).map_or_else(|_| default_data_dir(), PathBuf::from),
        };

        let config = Self {
            environment,
            plan_service,
            storage,
        };

        info!(
            environment = %config.environment,
            plan_service.url = %config.plan_service.base_url,
            storage.backend = %config.storage.backend,
            storage.data_dir = %config.storage.data_dir.display(),
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

/// Platform data directory joined with `eatitude`, or `./.eatitude` when unknown
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".eatitude"), |dir| dir.join("eatitude"))
}

fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("{key}: invalid value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
