use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::Field;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = "userdesk.toml";

/// Configuration loaded from userdesk.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub grid: GridConfig,
}

/// Users REST backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend origin
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Resource path under the origin
    #[serde(default = "default_resource")]
    pub resource: String,
    /// Timeout in seconds for API requests
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            resource: default_resource(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl BackendConfig {
    /// `{url}/{resource}` without duplicate slashes
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            self.resource.trim_matches('/')
        )
    }
}

fn default_backend_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_resource() -> String {
    "users".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// User grid presentation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Column sorted on when none is requested
    #[serde(default)]
    pub sort: Option<Field>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sort: None,
        }
    }
}

fn default_page_size() -> usize {
    10
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Try to load config from userdesk.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, url: Option<String>, timeout: Option<u64>) -> Self {
        if let Some(u) = url {
            self.backend.url = u;
        }
        if let Some(t) = timeout {
            self.backend.timeout_seconds = t;
        }
        self
    }

    /// Reject settings the backend connection cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.timeout_seconds == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Invalid backend URL '{0}': must start with http:// or https://")]
    InvalidUrl(String),
    #[error("Invalid timeout: timeout_seconds must be at least 1")]
    InvalidTimeout,
}
