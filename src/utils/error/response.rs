//! HTTP response handling for errors
//!
//! Errors collapse to a plain-text body. The status is the only thing a
//! caller can branch on; provider details stay in the logs.

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::QuotaExceeded(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.public_message())
    }
}

impl GatewayError {
    /// Body text shown to the caller
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Unauthorized(_) => Self::UNAUTHORIZED_MESSAGE.to_string(),
            GatewayError::Validation(msg) => msg.clone(),
            GatewayError::QuotaExceeded(_) => Self::QUOTA_MESSAGE.to_string(),
            // A missing API key is an operator problem worth naming
            GatewayError::Provider(ProviderError::Configuration { message, .. }) => message.clone(),
            _ => Self::INTERNAL_MESSAGE.to_string(),
        }
    }
}
