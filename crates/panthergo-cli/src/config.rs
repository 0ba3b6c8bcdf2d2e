//! Configuration management for the PantherGO CLI
//!
//! Holds the service location and transport settings. Values come from
//! defaults, then environment variables, then command-line flags.

use crate::error::{CliError, Result};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// PANTHER service root used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://pantherdb.org";

/// Request timeout in seconds. Enrichment over large backgrounds can take a
/// few minutes on the PANTHER side.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 300;

/// Environment variable overriding the service root.
pub const SERVER_URL_ENV: &str = "PANTHERGO_SERVER_URL";

/// Environment variable overriding the request timeout.
pub const API_TIMEOUT_ENV: &str = "PANTHERGO_API_TIMEOUT_SECS";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PANTHER service root, without trailing slash
    pub server_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Enable verbose output
    pub verbose: bool,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            verbose: false,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            config.set_server_url(url);
        }

        if let Ok(raw) = std::env::var(API_TIMEOUT_ENV) {
            config.timeout_secs = parse_timeout(&raw)?;
        }

        Ok(config)
    }

    /// Get the server URL
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Set the server URL, dropping any trailing slash
    pub fn set_server_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.server_url = url.trim_end_matches('/').to_string();
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Enable verbose output
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(CliError::config(format!(
            "{} must be a positive number of seconds, got '{}'",
            API_TIMEOUT_ENV, raw
        ))),
        Ok(secs) => Ok(secs),
    }
}
