//! Configuration types
//!
//! Two layers of configuration reach the adapter:
//!
//! - [`AdapterConfig`]: process-wide HTTP client settings loaded once at
//!   startup.
//! - [`Config`]: the datasource configuration blob embedded in every page
//!   request, checked through [`DatasourceConfig::validate`] before any other
//!   validation step.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Upper bound for the per-request timeout a host may configure
pub const MAX_REQUEST_TIMEOUT_SECONDS: u64 = 300;

// ============================================================================
// Datasource Config
// ============================================================================

/// Configuration blob carried by a page request
pub trait DatasourceConfig: Send + Sync {
    /// Check the configuration is internally consistent
    fn validate(&self) -> Result<()>;

    /// Overall timeout the host wants applied to one page fetch
    fn request_timeout(&self) -> Option<Duration> {
        None
    }
}

/// PagerDuty datasource configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Timeout for one page fetch, in seconds
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

impl Config {
    /// Parse a config blob from YAML or JSON
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a config blob from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }
}

impl DatasourceConfig for Config {
    fn validate(&self) -> Result<()> {
        match self.request_timeout_seconds {
            Some(seconds) if seconds == 0 || seconds > MAX_REQUEST_TIMEOUT_SECONDS => {
                Err(Error::invalid_datasource_config(format!(
                    "request_timeout_seconds must be between 1 and {MAX_REQUEST_TIMEOUT_SECONDS}, got {seconds}"
                )))
            }
            _ => Ok(()),
        }
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }
}

// ============================================================================
// Adapter Config
// ============================================================================

/// Process-wide adapter settings
///
/// The approved API host, the page bounds and the per-call deadline are fixed
/// constants and cannot be set here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Timeout configured on the underlying HTTP client, in seconds
    #[serde(default = "default_client_timeout_seconds")]
    pub client_timeout_seconds: u64,

    /// User agent sent to the datasource
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_client_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pagerduty-adapter/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            client_timeout_seconds: default_client_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl AdapterConfig {
    /// Parse settings from YAML (JSON is accepted too)
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml_str(&contents)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.client_timeout_seconds == 0 {
            return Err(Error::config("client_timeout_seconds must be positive"));
        }
        if self.user_agent.is_empty() {
            return Err(Error::config("user_agent must not be empty"));
        }
        Ok(())
    }

    /// HTTP client timeout
    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_seconds)
    }
}
