//! Trusted-header identity, for deployments behind an auth proxy

use actix_web::HttpRequest;

use super::{IdentityProvider, UserId};

/// Reads the caller id from a header set by an upstream proxy
#[derive(Debug, Clone)]
pub struct HeaderIdentity {
    header: String,
}

impl HeaderIdentity {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

impl IdentityProvider for HeaderIdentity {
    fn authenticate(&self, req: &HttpRequest) -> Option<UserId> {
        let value = req.headers().get(self.header.as_str())?.to_str().ok()?.trim();
        if value.is_empty() {
            None
        } else {
            Some(UserId::new(value))
        }
    }
}
