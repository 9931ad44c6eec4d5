//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Canonical messages returned to callers
impl GatewayError {
    /// Plain-text body for 401 responses
    pub const UNAUTHORIZED_MESSAGE: &'static str = "Unauthorized";
    /// Plain-text body for 403 responses
    pub const QUOTA_MESSAGE: &'static str = "Free trial has expired. Please upgrade to pro.";
    /// Plain-text body for 500 responses
    pub const INTERNAL_MESSAGE: &'static str = "Internal server error.";
}

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn quota_exceeded<S: Into<String>>(message: S) -> Self {
        Self::QuotaExceeded(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Missing `messages` on code/conversation requests
    pub fn messages_required() -> Self {
        Self::Validation("Messages are required.".to_string())
    }

    /// Missing `prompt` on image/music/video requests
    pub fn prompt_required() -> Self {
        Self::Validation("Prompt is required.".to_string())
    }

    /// Whether this error came from a generation provider
    pub fn is_provider_error(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}
