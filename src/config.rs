//! Client configuration.
//!
//! Values come from defaults, then environment variables, then CLI flags:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `PAYDESK_API_URL` | backend base URL | `http://localhost:8080/api/v1` |
//! | `PAYDESK_HOME` | directory for the session and log files | `~/.paydesk` |
//! | `PAYDESK_LOG` | `tracing` filter directive | `info` |

use std::path::PathBuf;
use thiserror::Error;

use crate::adapters::file_session::SESSION_FILE;
use crate::api::DEFAULT_API_URL;

pub const API_URL_ENV: &str = "PAYDESK_API_URL";
pub const HOME_ENV: &str = "PAYDESK_HOME";
pub const LOG_ENV: &str = "PAYDESK_LOG";

const DATA_DIR: &str = ".paydesk";
const LOG_FILE: &str = "paydesk.log";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API URL '{0}': {1}")]
    InvalidApiUrl(String, String),
}

/// Runtime configuration.
///
/// ```ignore
/// let config = ClientConfig::from_env().with_api_url("http://hr.internal:8080/api/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let data_dir = dirs::home_dir()
            .map(|home| home.join(DATA_DIR))
            .unwrap_or_else(|| PathBuf::from(DATA_DIR));
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir,
            log_filter: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Defaults overridden by any non-empty `PAYDESK_*` variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(API_URL_ENV) {
            config = config.with_api_url(url);
        }
        if let Some(home) = non_empty_env(HOME_ENV) {
            config = config.with_data_dir(home);
        }
        if let Some(filter) = non_empty_env(LOG_ENV) {
            config = config.with_log_filter(filter);
        }
        config
    }

    /// The API URL must be absolute http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::InvalidApiUrl(self.api_url.clone(), e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidApiUrl(
                self.api_url.clone(),
                format!("unsupported scheme '{}'", other),
            )),
        }
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join(SESSION_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
