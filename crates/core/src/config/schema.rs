//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub external: ExternalSearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fixed requester position; absent means location is unavailable
    #[serde(default)]
    pub location: Option<LocationConfig>,
}

impl ConfigSchema {
    /// Validate value ranges
    pub fn validate(&self) -> Result<()> {
        let rating = self.search.recommended_min_rating;
        if !(0.0..=5.0).contains(&rating) {
            return Err(Error::config_validation(format!(
                "search.recommended_min_rating must be within 0.0-5.0, got {rating}"
            )));
        }

        if self.external.timeout_secs == 0 {
            return Err(Error::config_validation("external.timeout_secs cannot be zero"));
        }

        if !self.external.base_url.starts_with("http://")
            && !self.external.base_url.starts_with("https://")
        {
            return Err(Error::config_validation(
                "external.base_url must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

/// Local search configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Minimum rating for the "recommended" browsing filter
    #[serde(default = "default_recommended_min_rating")]
    pub recommended_min_rating: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            recommended_min_rating: default_recommended_min_rating(),
        }
    }
}

fn default_recommended_min_rating() -> f64 {
    4.5
}

/// External place search configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalSearchConfig {
    /// Whether to call the external search after local search
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Generative model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ExternalSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Fixed requester position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}
