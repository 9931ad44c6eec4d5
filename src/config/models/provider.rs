//! Provider configuration

use crate::core::providers::gemini::GeminiConfig;
use crate::core::providers::stability::StabilityConfig;
use serde::{Deserialize, Serialize};

/// Connection settings for each upstream provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub stability: StabilityConfig,
}
