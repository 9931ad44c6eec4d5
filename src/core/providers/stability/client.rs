//! Stability Client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder};

use super::config::StabilityConfig;
use super::models::{StabilityErrorBody, TextPrompt, TextToImageRequest, TextToImageResponse};
use super::{MISSING_KEY_MESSAGE, PROVIDER_NAME};
use crate::core::capabilities::{ImageGenerator, ImageSpec};
use crate::core::providers::unified_provider::ProviderError;

/// Stability API client
#[derive(Debug, Clone)]
pub struct StabilityClient {
    config: StabilityConfig,
    http_client: Client,
}

impl StabilityClient {
    pub fn new(config: StabilityConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| {
                ProviderError::network(PROVIDER_NAME, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// One `text-to-image` call producing a single sample
    pub async fn text_to_image(
        &self,
        request: &TextToImageRequest,
    ) -> Result<TextToImageResponse, ProviderError> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| ProviderError::configuration(PROVIDER_NAME, MISSING_KEY_MESSAGE))?;
        let url = self.config.text_to_image_endpoint();
        tracing::debug!("Stability request URL: {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_NAME, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_NAME, e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<StabilityErrorBody>(&body)
                .ok()
                .and_then(|error| error.message.or(error.name))
                .unwrap_or(body);
            return Err(ProviderError::from_http_status(
                PROVIDER_NAME,
                status.as_u16(),
                &message,
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            ProviderError::response_parsing(
                PROVIDER_NAME,
                format!("Failed to parse response JSON: {}", e),
            )
        })
    }

    /// Convert artifacts into `data:` URIs, rejecting filtered ones
    pub fn artifacts_to_data_uris(
        response: TextToImageResponse,
    ) -> Result<Vec<String>, ProviderError> {
        let mut uris = Vec::with_capacity(response.artifacts.len());
        for artifact in response.artifacts {
            if artifact.finish_reason.as_deref() == Some("CONTENT_FILTERED") {
                return Err(ProviderError::content_filtered(PROVIDER_NAME, "CONTENT_FILTERED"));
            }
            if let Some(base64) = artifact.base64 {
                uris.push(format!("data:image/png;base64,{}", base64));
            }
        }

        if uris.is_empty() {
            return Err(ProviderError::response_parsing(
                PROVIDER_NAME,
                "Response contained no image artifacts",
            ));
        }
        Ok(uris)
    }
}

#[async_trait]
impl ImageGenerator for StabilityClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn generate(&self, spec: &ImageSpec) -> Result<Vec<String>, ProviderError> {
        let request = TextToImageRequest {
            text_prompts: vec![TextPrompt {
                text: spec.prompt.clone(),
            }],
            width: spec.resolution.width,
            height: spec.resolution.height,
            samples: 1,
        };

        let mut images = Vec::with_capacity(spec.count as usize);
        for _ in 0..spec.count {
            let response = self.text_to_image(&request).await?;
            images.extend(Self::artifacts_to_data_uris(response)?);
        }
        Ok(images)
    }
}
