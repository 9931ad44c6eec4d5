//! Gemini Configuration Module

use serde::{Deserialize, Serialize};

use crate::config::validation::Validate;

/// Gemini connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio). Checked at call time, not at startup.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl GeminiConfig {
    /// Create a Google AI Studio config with the given key
    pub fn new_google_ai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Builder-style base URL override, used to point at a mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Key with surrounding whitespace removed, `None` when unset or blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Endpoint for a model operation, without the key
    pub fn get_endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            model,
            operation
        )
    }
}

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("Gemini base_url must be an http(s) URL, got '{}'", self.base_url));
        }
        if self.api_version.is_empty() {
            return Err("Gemini api_version cannot be empty".to_string());
        }
        if self.request_timeout == 0 || self.connect_timeout == 0 {
            return Err("Gemini timeouts must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_api_version() -> String {
    "v1beta".to_string()
}

fn default_request_timeout() -> u64 {
    600
}

fn default_connect_timeout() -> u64 {
    10
}
