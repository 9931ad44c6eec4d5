//! Stability wire types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TextToImageRequest {
    pub text_prompts: Vec<TextPrompt>,
    pub width: u32,
    pub height: u32,
    pub samples: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextPrompt {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextToImageResponse {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default)]
    pub base64: Option<String>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Error body: `{"id": ..., "name": ..., "message": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct StabilityErrorBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
