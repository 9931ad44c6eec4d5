//! Generation capabilities
//!
//! A capability is one modality (code, conversation, image, music, video).
//! Chat and image capabilities wrap a provider adapter behind a trait and
//! apply the configured failure policy; music and video resolve through the
//! keyword tables in `core::fallback`.

mod chat;
mod image;
mod media;

pub use chat::{ChatCapability, ChatKind};
pub use image::ImageCapability;
pub use media::MediaCapability;

use crate::core::providers::ProviderError;
use crate::core::types::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling settings forwarded to text providers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// One chat-session call: prior turns plus the prompt for the current turn
#[derive(Debug, Clone)]
pub struct TextGenerationRequest {
    pub model: String,
    pub history: Vec<ChatMessage>,
    pub prompt: String,
    pub settings: GenerationSettings,
}

/// Text generation provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    /// Generate a reply for the final turn of a conversation
    async fn generate(&self, request: TextGenerationRequest) -> Result<String, ProviderError>;
}

/// Output size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Validated image request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub prompt: String,
    pub count: u32,
    pub resolution: Resolution,
}

/// Image generation provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    /// Produce `spec.count` images as URLs or `data:` URIs
    async fn generate(&self, spec: &ImageSpec) -> Result<Vec<String>, ProviderError>;
}

/// What a capability does when its provider fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Surface the failure as a 500
    Propagate,
    /// Substitute a degraded result
    Fallback,
}

/// Where a delivered result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Provider,
    Fallback,
}

/// A capability result tagged with its source
#[derive(Debug, Clone, PartialEq)]
pub struct Generated<T> {
    pub value: T,
    pub source: ResultSource,
}

impl<T> Generated<T> {
    pub fn from_provider(value: T) -> Self {
        Self {
            value,
            source: ResultSource::Provider,
        }
    }

    pub fn from_fallback(value: T) -> Self {
        Self {
            value,
            source: ResultSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::Fallback
    }
}
