//! Configuration management for the Gateway
//!
//! Configuration is read once at startup: YAML file first, then environment
//! overrides. The result is injected into adapters at construction; nothing
//! downstream reads the environment.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Default configuration path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Main configuration struct for the Gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let gateway: GatewayConfig = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise start from defaults, then apply
    /// the process environment
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::from_file(path).await?
        } else {
            info!("No configuration file at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Overlay values from an arbitrary variable lookup
    ///
    /// Recognised: `GEMINI_API_KEY` (falling back to `GOOGLE_API_KEY`),
    /// `STABILITY_API_KEY`, `GATEWAY_HOST`, `GATEWAY_PORT`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")) {
            self.gateway.providers.gemini.api_key = Some(key);
        }
        if let Some(key) = non_empty("STABILITY_API_KEY") {
            self.gateway.providers.stability.api_key = Some(key);
        }
        if let Some(host) = non_empty("GATEWAY_HOST") {
            self.gateway.server.host = host;
        }
        if let Some(port) = non_empty("GATEWAY_PORT") {
            self.gateway.server.port = port
                .trim()
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid GATEWAY_PORT: {}", e)))?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get providers configuration
    pub fn providers(&self) -> &ProvidersConfig {
        &self.gateway.providers
    }

    /// Get capability configuration
    pub fn capabilities(&self) -> &CapabilitiesConfig {
        &self.gateway.capabilities
    }

    /// Get entitlement configuration
    pub fn entitlement(&self) -> &EntitlementConfig {
        &self.gateway.entitlement
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.gateway.auth
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.gateway
            .validate()
            .map_err(|e| GatewayError::Config(format!("Invalid configuration: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.gateway.auth);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.gateway)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
