//! Caller identity
//!
//! Handlers only need to know who is calling. Verification itself belongs
//! to whatever sits in front of the gateway, so identity is an injected
//! trait with two in-process implementations.

pub mod api_key;
pub mod header;

pub use api_key::ApiKeyIdentity;
pub use header::HeaderIdentity;

use std::sync::Arc;

use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};

use crate::config::models::auth::{AuthConfig, AuthMode};

/// Authenticated caller id
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Resolves the caller of a request
pub trait IdentityProvider: Send + Sync {
    /// `None` when the request carries no acceptable identity
    fn authenticate(&self, req: &HttpRequest) -> Option<UserId>;
}

/// Build the provider selected by `auth.mode`
pub fn create_identity_provider(config: &AuthConfig) -> Arc<dyn IdentityProvider> {
    match config.mode {
        AuthMode::ApiKey => Arc::new(ApiKeyIdentity::new(config.api_keys.clone())),
        AuthMode::Header => Arc::new(HeaderIdentity::new(config.user_header.clone())),
    }
}
