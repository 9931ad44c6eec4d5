//! Gemini Client
//!
//! One `reqwest::Client` per process, built from `GeminiConfig`. The key is
//! sent as the `key` query parameter and never logged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};

use super::PROVIDER_NAME;
use super::config::GeminiConfig;
use super::error::{GeminiErrorMapper, gemini_missing_key};
use super::models::{Content, GenerateContentRequest, GenerateContentResponse};
use crate::core::capabilities::{TextGenerationRequest, TextGenerator};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::MessageRole;

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                ProviderError::network(PROVIDER_NAME, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Call `generateContent` and return the parsed envelope
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let api_key = self.config.api_key().ok_or_else(gemini_missing_key)?;
        let url = self.config.get_endpoint(model, "generateContent");
        tracing::debug!("Gemini request URL: {}", url);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_NAME, e))?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_NAME, e))?;

        tracing::debug!("Gemini response status: {}", status);

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        serde_json::from_str(&response_text).map_err(|e| {
            ProviderError::response_parsing(
                PROVIDER_NAME,
                format!("Failed to parse response JSON: {}", e),
            )
        })
    }

    /// Build the request body: prior turns, then the current prompt as a user turn
    pub fn transform_request(request: &TextGenerationRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|message| {
                let role = match message.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "model",
                };
                Content::text(role, message.content.clone())
            })
            .collect();
        contents.push(Content::text("user", request.prompt.clone()));

        GenerateContentRequest {
            contents,
            generation_config: request.settings.into(),
        }
    }

    /// Concatenate the text parts of the first candidate
    pub fn extract_text(response: &GenerateContentResponse) -> Result<String, ProviderError> {
        let candidate = GeminiErrorMapper::check_candidates(response)?;
        let text: String = candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect();
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn generate(&self, request: TextGenerationRequest) -> Result<String, ProviderError> {
        let body = Self::transform_request(&request);
        let response = self.generate_content(&request.model, &body).await?;
        Self::extract_text(&response)
    }
}
