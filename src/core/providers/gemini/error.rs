//! Gemini Error Handling
//!
//! Maps HTTP statuses, `error` envelopes and blocked candidates onto
//! `ProviderError`.

use serde::Deserialize;

use super::PROVIDER_NAME;
use super::models::{Candidate, GenerateContentResponse};
use crate::core::providers::unified_provider::ProviderError;

/// Message used when no usable key is configured
pub const MISSING_KEY_MESSAGE: &str = "Gemini API Key is required";

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Error mapper for Gemini responses
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    /// Map a non-2xx response, preferring the structured `error` body
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            return Self::from_api_error(status, envelope.error);
        }

        match status {
            404 => ProviderError::api_error(PROVIDER_NAME, status, "Model or endpoint not found"),
            500..=599 => {
                ProviderError::api_error(PROVIDER_NAME, status, format!("Server error: {}", body))
            }
            _ => ProviderError::from_http_status(PROVIDER_NAME, status, body),
        }
    }

    fn from_api_error(http_status: u16, error: ApiError) -> ProviderError {
        let code = error.code.unwrap_or(http_status);
        let message = error.message.unwrap_or_else(|| "Unknown error".to_string());

        match (code, error.status.as_deref().unwrap_or("")) {
            (401, _) | (_, "UNAUTHENTICATED") | (403, _) | (_, "PERMISSION_DENIED") => {
                ProviderError::authentication(PROVIDER_NAME, message)
            }
            (400, _) | (_, "INVALID_ARGUMENT") | (_, "FAILED_PRECONDITION") => {
                ProviderError::invalid_request(PROVIDER_NAME, message)
            }
            (429, _) | (_, "RESOURCE_EXHAUSTED") => ProviderError::RateLimit {
                provider: PROVIDER_NAME,
                message,
                retry_after: None,
            },
            _ => ProviderError::api_error(PROVIDER_NAME, code, message),
        }
    }

    /// Reject responses that carry no usable text
    pub fn check_candidates(response: &GenerateContentResponse) -> Result<&Candidate, ProviderError> {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return Err(ProviderError::content_filtered(PROVIDER_NAME, reason));
        }

        let candidate = response.candidates.first().ok_or_else(|| {
            ProviderError::response_parsing(PROVIDER_NAME, "Response contained no candidates")
        })?;

        match candidate.finish_reason.as_deref() {
            Some("SAFETY") => Err(ProviderError::content_filtered(
                PROVIDER_NAME,
                "Content blocked by safety filters",
            )),
            Some("RECITATION") => Err(ProviderError::content_filtered(
                PROVIDER_NAME,
                "Content blocked due to recitation",
            )),
            _ => Ok(candidate),
        }
    }
}

/// Error for a missing or blank API key
pub fn gemini_missing_key() -> ProviderError {
    ProviderError::configuration(PROVIDER_NAME, MISSING_KEY_MESSAGE)
}
