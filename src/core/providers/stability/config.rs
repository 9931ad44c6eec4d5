//! Stability Configuration Module

use serde::{Deserialize, Serialize};

use crate::config::validation::Validate;

/// Stability connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Engine id in the generation path
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            engine: default_engine(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl StabilityConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

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

    pub fn text_to_image_endpoint(&self) -> String {
        format!(
            "{}/v1/generation/{}/text-to-image",
            self.base_url.trim_end_matches('/'),
            self.engine
        )
    }
}

impl Validate for StabilityConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Stability base_url must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }
        if self.engine.trim().is_empty() {
            return Err("Stability engine cannot be empty".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Stability request_timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.stability.ai".to_string()
}

fn default_engine() -> String {
    "stable-diffusion-xl-1024-v1-0".to_string()
}

fn default_request_timeout() -> u64 {
    120
}
