use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Endpoint the breed list is fetched from when no config overrides it
pub const DEFAULT_ENDPOINT: &str = "https://api.thecatapi.com/v1/breeds";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// Request timeout in seconds; `None` waits for as long as the server takes
    pub request_timeout_secs: Option<u64>,
    /// Event polling interval for the UI loop
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".cat-breeds-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, if there is a readable one
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "could not read config");
                return None;
            }
        };
        Self::parse(&contents)
    }

    /// Load the config file or fall back to defaults
    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    fn parse(contents: &str) -> Option<Config> {
        match serde_json::from_str(contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed config");
                None
            }
        }
    }
}
