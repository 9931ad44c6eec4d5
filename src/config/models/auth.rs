//! Authentication configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// How callers are identified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// `Authorization: Bearer <key>` looked up in `api_keys`
    #[default]
    ApiKey,
    /// Caller id taken from `user_header`, set by a trusted proxy
    Header,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub mode: AuthMode,
    /// API key to user id
    #[serde(default)]
    pub api_keys: HashMap<String, String>,
    #[serde(default = "default_user_header")]
    pub user_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            api_keys: HashMap::new(),
            user_header: default_user_header(),
        }
    }
}

/// Log configurations that are valid but probably not intended
pub fn warn_insecure_config(config: &AuthConfig) {
    match config.mode {
        AuthMode::ApiKey if config.api_keys.is_empty() => {
            warn!("No API keys configured; every request will be rejected with 401");
        }
        AuthMode::Header => {
            warn!(
                "Trusting caller identity from the '{}' header; only expose the gateway behind a proxy that sets it",
                config.user_header
            );
        }
        _ => {}
    }
}
