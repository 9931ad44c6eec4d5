//! Gemini-backed image variant
//!
//! Gemini cannot return image bytes here, so each requested image makes one
//! text call for the prompt and then emits a stock-photo URL sized to the
//! requested resolution. The generated text is discarded.

use std::sync::Arc;

use async_trait::async_trait;

use super::PROVIDER_NAME;
use super::client::GeminiClient;
use super::models::{Content, GenerateContentRequest, GenerationConfig};
use crate::core::capabilities::{ImageGenerator, ImageSpec};
use crate::core::providers::stock_photo;
use crate::core::providers::unified_provider::ProviderError;

/// Model used for the image prompt call
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-1.5-pro-vision";

/// Gemini call plus stock-photo URL, one pair per image
#[derive(Debug, Clone)]
pub struct GeminiStockPhotoImages {
    client: Arc<GeminiClient>,
    model: String,
}

impl GeminiStockPhotoImages {
    pub fn new(client: Arc<GeminiClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    fn request_for(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(
                "user",
                format!("Generate an image based on this description: {}", prompt),
            )],
            generation_config: GenerationConfig {
                temperature: 0.8,
                top_p: 1.0,
                top_k: 32,
                max_output_tokens: Some(2048),
            },
        }
    }
}

#[async_trait]
impl ImageGenerator for GeminiStockPhotoImages {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn generate(&self, spec: &ImageSpec) -> Result<Vec<String>, ProviderError> {
        let request = Self::request_for(&spec.prompt);
        let mut images = Vec::with_capacity(spec.count as usize);

        // One upstream call in flight at a time
        for _ in 0..spec.count {
            let response = self.client.generate_content(&self.model, &request).await?;
            GeminiClient::extract_text(&response)?;
            images.push(stock_photo::stock_photo_url(&spec.prompt, spec.resolution));
        }

        Ok(images)
    }
}
