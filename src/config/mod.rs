//! Configuration management for the esampo application.
//!
//! This module handles locating, loading, and validating the TOML config file
//! that holds the esa credentials and the category path pattern.
//!
//! # File Format
//!
//! ```toml
//! access_token = "..."
//! team_name = "myteam"
//! my_screen_name = "alice"
//! path = "日報/%Y/%m/%d"
//! # api_url = "https://api.esa.io"
//! ```
//!
//! # Location
//!
//! In order of precedence:
//! - The `--config` flag
//! - The `ESAMPO_CONFIG` environment variable
//! - `~/.esamporc`

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_CONFIG_PATH, ENV_VAR_ESAMPO_CONFIG, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::esa::format_date;
use chrono::NaiveDate;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the esampo application.
///
/// # Examples
///
/// ```
/// use esampo::Config;
///
/// let config: Config = toml::from_str(r#"
///     access_token = "token"
///     team_name = "myteam"
///     my_screen_name = "alice"
///     path = "日報/%Y/%m/%d"
/// "#).unwrap();
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.api_url(), "https://api.esa.io");
/// ```
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Personal access token for the esa API.
    pub access_token: String,

    /// The esa team (the `myteam` in `myteam.esa.io`).
    pub team_name: String,

    /// The current user's screen name, excluded by default.
    pub my_screen_name: String,

    /// strftime pattern turning a date into the category path to search in.
    pub path: String,

    /// Base URL of the esa API. Defaults to the public endpoint.
    #[serde(default)]
    pub api_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_token", &REDACTED_PLACEHOLDER)
            .field("team_name", &self.team_name)
            .field("my_screen_name", &self.my_screen_name)
            .field("path", &self.path)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    /// Loads and validates the config file at the resolved location.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the path cannot be resolved, the file cannot
    /// be read or parsed, or a field fails validation.
    pub fn load(cli_path: Option<&str>) -> AppResult<Self> {
        let path = resolve_config_path(cli_path)?;
        debug!("Loading configuration from {}", path.display());
        let config = Self::load_from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a config file without validating it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or is not valid TOML
    /// with the expected keys.
    pub fn load_from_path(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            AppError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any required field is empty or `path` is
    /// not a pattern that can render a calendar date.
    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("access_token", &self.access_token),
            ("team_name", &self.team_name),
            ("my_screen_name", &self.my_screen_name),
            ("path", &self.path),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{} is empty", key)));
            }
        }

        if let Some(api_url) = &self.api_url {
            if api_url.trim().is_empty() {
                return Err(AppError::Config("api_url is empty".to_string()));
            }
        }

        // Any date works; this only checks that the pattern renders.
        let probe = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        format_date(probe, &self.path)?;

        Ok(())
    }

    /// The API base URL, falling back to the public esa endpoint.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

/// Resolves the config file location.
///
/// The `--config` value wins over `ESAMPO_CONFIG`, which wins over
/// `~/.esamporc`. `~` and environment variables are expanded.
///
/// # Errors
///
/// Returns `AppError::Config` if path expansion fails (e.g. `HOME` is unset).
pub fn resolve_config_path(cli_path: Option<&str>) -> AppResult<PathBuf> {
    let raw = match cli_path.filter(|p| !p.is_empty()) {
        Some(path) => path.to_string(),
        None => env::var(ENV_VAR_ESAMPO_CONFIG)
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()),
    };

    let expanded = shellexpand::full(&raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

    Ok(PathBuf::from(expanded.into_owned()))
}
