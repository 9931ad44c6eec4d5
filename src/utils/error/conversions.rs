//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        GatewayError::Provider(err)
    }
}

impl From<actix_web::error::JsonPayloadError> for GatewayError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        GatewayError::Validation("Invalid JSON body.".to_string())
    }
}
