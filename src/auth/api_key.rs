//! Bearer API key identity

use std::collections::HashMap;

use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;

use super::{IdentityProvider, UserId};

/// Maps `Authorization: Bearer <key>` to a configured user id
#[derive(Debug, Clone, Default)]
pub struct ApiKeyIdentity {
    keys: HashMap<String, UserId>,
}

impl ApiKeyIdentity {
    /// `keys` maps API key to user id
    pub fn new(keys: HashMap<String, String>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|(key, user)| (key, UserId::new(user)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Token from an `Authorization: Bearer` header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

impl IdentityProvider for ApiKeyIdentity {
    fn authenticate(&self, req: &HttpRequest) -> Option<UserId> {
        let token = extract_bearer_token(req)?;
        self.keys.get(token).cloned()
    }
}
