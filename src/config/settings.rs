//! TOML-based configuration.
//!
//! Looks for `strata.toml` in the working directory, then in the user
//! config directory. Missing file means defaults; every field has one.
//!
//! Example configuration:
//! ```toml
//! [api]
//! base_url = "http://${BI_HOST}:8000/api"
//! timeout_secs = 30
//! source_schema = "osaio"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend API configuration.
    pub api: ApiSettings,
}

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the backend API (supports `${ENV_VAR}` expansion).
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Schema name of the operational source database.
    pub source_schema: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
            source_schema: "osaio".to_string(),
        }
    }
}

impl ApiSettings {
    /// Base URL with environment variables expanded; unresolvable
    /// variables fall back to the raw string so a bad config still points
    /// somewhere debuggable.
    pub fn resolved_base_url(&self) -> String {
        expand_env_vars(&self.base_url).unwrap_or_else(|_| self.base_url.clone())
    }
}

impl Settings {
    /// Load from the first config file found, or defaults when none exists.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &PathBuf) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from("strata.toml");
        if local.exists() {
            return Some(local);
        }
        let user = dirs::config_dir()?.join("strata").join("strata.toml");
        user.exists().then_some(user)
    }
}

/// Expand `${VAR}` references against the environment.
fn expand_env_vars(input: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or_else(|| SettingsError::MissingEnvVar(after.to_string()))?;
        let var_name = &after[..end];
        let value =
            env::var(var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.to_string()))?;
        result.push_str(&value);
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    Ok(result)
}
