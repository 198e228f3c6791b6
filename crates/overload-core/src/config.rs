//! Client configuration.
//!
//! Settings are read from a JSON file, by default
//! `$XDG_CONFIG_HOME/overload/config.json`. A missing file yields the
//! defaults; a present but unreadable or malformed file is an error.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{OverloadError, Result, ResultExt};

/// Default API base URL of a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the plan store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// API base URL the week plan endpoints hang off
    pub base_url: String,

    /// Anti-forgery token sent as `X-CSRFToken`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Raw `Cookie` header value carrying the session credential
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            csrf_token: None,
            session_cookie: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, or from the XDG default location
    /// when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `OverloadError::XdgDirectory` if the default location cannot
    /// be resolved, `OverloadError::FileSystem` if the file exists but cannot
    /// be read, and `OverloadError::Configuration` if it is not valid JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| OverloadError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Returns the default config path following the XDG Base Directory
    /// specification. Nothing is created on disk.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("overload")
            .get_config_file("config.json")
            .ok_or_else(|| OverloadError::XdgDirectory("no config home directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config::load(Some(&temp_dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"base_url": "https://gym.example/api", "csrf_token": "abc"}"#)
            .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "https://gym.example/api");
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.session_cookie.is_none());
    }

    #[test]
    fn test_default_path_creates_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let path = Config::default_path().unwrap();
        let config = Config::load(None).unwrap();

        assert_eq!(path, temp_dir.path().join("overload").join("config.json"));
        assert_eq!(config, Config::default());
        assert!(!temp_dir.path().join("overload").exists());
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, OverloadError::Configuration { .. }));
    }
}
