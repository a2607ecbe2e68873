//! Configuration for the grounded place search client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use aroundin_core::config::ExternalSearchConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default generative language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for grounded place search
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Primary environment variable holding the API key
pub const API_KEY_VAR: &str = "API_KEY";

/// Fallback environment variable holding the API key
const FALLBACK_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API base URL, without trailing `/models`
    pub base_url: String,
    /// Model name (e.g. `gemini-2.5-flash`)
    pub model: String,
    /// API key; requests fail with [`ApiError::MissingApiKey`] when absent
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `API_KEY` or `GEMINI_API_KEY`: API key
    /// - `AROUNDIN_SEARCH_URL`: API base URL
    /// - `AROUNDIN_SEARCH_MODEL`: model name
    /// - `AROUNDIN_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let defaults = Self::default();

        let base_url = env::var("AROUNDIN_SEARCH_URL").unwrap_or(defaults.base_url);
        let model = env::var("AROUNDIN_SEARCH_MODEL").unwrap_or(defaults.model);

        let timeout = match env::var("AROUNDIN_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ApiError::config(format!("AROUNDIN_TIMEOUT_SECS is not a number: {raw}")))?,
            Err(_) => defaults.timeout,
        };

        Ok(Self {
            base_url,
            model,
            api_key: api_key_from_env(),
            timeout,
        })
    }

    /// Create configuration from file settings, taking the API key from the environment
    #[must_use]
    pub fn from_settings(settings: &ExternalSearchConfig) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            api_key: api_key_from_env(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder-style method to set the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the `generateContent` endpoint for the configured model
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(self.base_url.clone()));
        }

        if self.model.trim().is_empty() {
            return Err(ApiError::config("model cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_VAR)
        .or_else(|_| env::var(FALLBACK_API_KEY_VAR))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.contains("generativelanguage.googleapis.com"));
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_generate_content_url() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(
            config.generate_content_url(),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_model("gemini-2.5-pro")
            .with_api_key("secret")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_settings() {
        let settings = ExternalSearchConfig {
            timeout_secs: 7,
            model: "custom-model".to_string(),
            ..ExternalSearchConfig::default()
        };
        let config = ClientConfig::from_settings(&settings);
        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.model, "custom-model");
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = ClientConfig::default().with_api_key("secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(matches!(
            ClientConfig::default().with_base_url("localhost").validate(),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(ClientConfig::default().with_timeout(Duration::ZERO).validate().is_err());
    }
}
