//! Core configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating gateway configuration");

        self.server.validate()?;
        self.providers.validate()?;
        self.capabilities.validate()?;
        self.entitlement.validate()?;
        self.auth.validate()?;

        debug!("Gateway configuration validation completed");
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Server workers must be greater than 0".to_string());
        }

        if self.timeout == 0 {
            return Err("Timeout cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled {
            if self.allows_all_origins() && self.allow_credentials {
                return Err("CORS cannot allow all origins (*) when credentials are enabled for security reasons".to_string());
            }

            if self.allows_all_origins() {
                warn!("CORS allows all origins. This may be insecure for production.");
            }
        }
        Ok(())
    }
}

impl Validate for ProvidersConfig {
    fn validate(&self) -> Result<(), String> {
        self.gemini.validate()?;
        self.stability.validate()
    }
}

impl Validate for CapabilitiesConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, chat) in [("code", &self.code), ("conversation", &self.conversation)] {
            chat.validate()
                .map_err(|e| format!("capabilities.{}: {}", name, e))?;
        }
        self.image
            .validate()
            .map_err(|e| format!("capabilities.image: {}", e))
    }
}

impl Validate for ChatCapabilityConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err("model cannot be empty".to_string());
            }
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(format!("temperature must be within 0.0..=2.0, got {}", temperature));
            }
        }
        if let Some(top_p) = self.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(format!("top_p must be within 0.0..=1.0, got {}", top_p));
            }
        }
        if self.top_k == Some(0) {
            return Err("top_k must be greater than 0".to_string());
        }
        if self.max_output_tokens == Some(0) {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for ImageCapabilityConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_images == 0 || self.max_images > 10 {
            return Err(format!(
                "max_images must be within 1..=10, got {}",
                self.max_images
            ));
        }
        if self.model.trim().is_empty() {
            return Err("model cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for EntitlementConfig {
    fn validate(&self) -> Result<(), String> {
        if self.subscribers.iter().any(|s| s.trim().is_empty()) {
            return Err("Subscriber ids cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.user_header.trim().is_empty() {
            return Err("auth.user_header cannot be empty".to_string());
        }
        if actix_web::http::header::HeaderName::from_bytes(self.user_header.as_bytes()).is_err() {
            return Err(format!("auth.user_header '{}' is not a valid header name", self.user_header));
        }
        for (key, user) in &self.api_keys {
            if key.trim().is_empty() || user.trim().is_empty() {
                return Err("auth.api_keys entries cannot be empty".to_string());
            }
        }
        Ok(())
    }
}
