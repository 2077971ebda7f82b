use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::repository::error::ConfigError;

/// Canonical Maven Central base URL (no trailing slash)
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

// =============================================================================
// HTTP-related constants
// =============================================================================

/// Number of retries after the first attempt for server errors and connect failures
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Delay before the first retry in milliseconds
pub const DEFAULT_INITIAL_RETRY_DELAY_MS: u64 = 1_000;

/// Growth factor between consecutive retry delays.
/// 1.35 puts the fifth delay at roughly 4.5 seconds.
pub const DEFAULT_RETRY_MULTIPLIER: f64 = 1.35;

/// Upper bound for a single retry delay in milliseconds
pub const DEFAULT_MAX_RETRY_DELAY_MS: u64 = 10_000;

/// Timeout for a single request in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Maven Central answers 403 to requests without a user agent
pub const DEFAULT_USER_AGENT: &str = concat!("maven-release-history/", env!("CARGO_PKG_VERSION"));

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Target repository consulted alongside Maven Central
    pub repository_url: String,
    pub http: HttpConfig,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            repository_url: MAVEN_CENTRAL_URL.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl HistoryConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Transport settings shared by every repository the resolver talks to
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpConfig {
    pub max_retries: u32,
    pub initial_retry_delay_ms: u64,
    pub retry_multiplier: f64,
    pub max_retry_delay_ms: u64,
    pub request_timeout_ms: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_retry_delay_ms: DEFAULT_INITIAL_RETRY_DELAY_MS,
            retry_multiplier: DEFAULT_RETRY_MULTIPLIER,
            max_retry_delay_ms: DEFAULT_MAX_RETRY_DELAY_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Returns the path to the data directory for maven-release-history.
/// Uses $XDG_DATA_HOME/maven-release-history if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/maven-release-history,
/// or ./maven-release-history if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the default path of the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("maven-release-history.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("maven-release-history")
}
