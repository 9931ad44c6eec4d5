//! Capability configuration

use super::*;
use crate::core::capabilities::FailurePolicy;
use crate::core::providers::ImageProviderKind;
use crate::core::providers::gemini::images::DEFAULT_IMAGE_MODEL;
use serde::{Deserialize, Serialize};

/// Per-capability settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilitiesConfig {
    #[serde(default)]
    pub code: ChatCapabilityConfig,
    #[serde(default)]
    pub conversation: ChatCapabilityConfig,
    #[serde(default)]
    pub image: ImageCapabilityConfig,
}

/// Overrides for a chat capability. Unset fields use the capability's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCapabilityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_policy: Option<FailurePolicy>,
}

/// Image capability settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCapabilityConfig {
    #[serde(default)]
    pub provider: ImageProviderKind,
    /// Gemini model for the `gemini_stock_photo` variant
    #[serde(default = "default_image_model")]
    pub model: String,
    #[serde(default = "default_image_failure_policy")]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_max_images")]
    pub max_images: u32,
}

impl Default for ImageCapabilityConfig {
    fn default() -> Self {
        Self {
            provider: ImageProviderKind::default(),
            model: default_image_model(),
            failure_policy: default_image_failure_policy(),
            max_images: default_max_images(),
        }
    }
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_image_failure_policy() -> FailurePolicy {
    FailurePolicy::Fallback
}
