//! Mock upstream providers
//!
//! Thin wrappers over `wiremock::MockServer` that know the wire shape of
//! each provider, so tests state intent ("Gemini answers with this text")
//! rather than HTTP plumbing.

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{TEST_GEMINI_KEY, TEST_STABILITY_KEY};

/// Chat model used when the config sets none
pub const CHAT_MODEL: &str = "gemini-1.5-pro";
/// Model used by the Gemini image variant
pub const IMAGE_MODEL: &str = "gemini-1.5-pro-vision";

/// `generateContent` envelope carrying `text` as the only part
pub fn gemini_text_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

/// Google-style error envelope
pub fn gemini_error_body(code: u16, status: &str, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message, "status": status } })
}

/// Mock Gemini API
pub struct MockGemini {
    server: MockServer,
}

impl MockGemini {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    fn generate_content(model: &str) -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(format!("/v1beta/models/{}:generateContent", model)))
            .and(query_param("key", TEST_GEMINI_KEY))
    }

    /// Answer every call to `model` with `text`
    pub async fn reply_text(&self, model: &str, text: &str) {
        Self::generate_content(model)
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text_body(text)))
            .mount(&self.server)
            .await;
    }

    /// Answer every call to `model` with `status` and an error envelope
    pub async fn reply_error(&self, model: &str, status: u16) {
        Self::generate_content(model)
            .respond_with(ResponseTemplate::new(status).set_body_json(gemini_error_body(
                status,
                "UNAVAILABLE",
                "The model is overloaded.",
            )))
            .mount(&self.server)
            .await;
    }

    /// Answer every call to `model` with an arbitrary JSON body
    pub async fn reply_json(&self, model: &str, body: Value) {
        Self::generate_content(model)
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Expect exactly `times` calls to `model`, answered with `text`
    pub async fn expect_calls(&self, model: &str, text: &str, times: u64) {
        Self::generate_content(model)
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_text_body(text)))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every request received so far
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Mock Stability API
pub struct MockStability {
    server: MockServer,
}

impl MockStability {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    fn text_to_image() -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(
                "/v1/generation/stable-diffusion-xl-1024-v1-0/text-to-image",
            ))
            .and(header(
                "authorization",
                format!("Bearer {}", TEST_STABILITY_KEY).as_str(),
            ))
    }

    /// Answer every call with one artifact carrying `base64`
    pub async fn reply_image(&self, base64: &str) {
        Self::text_to_image()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artifacts": [{ "base64": base64, "seed": 1, "finishReason": "SUCCESS" }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer every call with a filtered artifact
    pub async fn reply_filtered(&self) {
        Self::text_to_image()
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "artifacts": [{ "base64": "", "seed": 1, "finishReason": "CONTENT_FILTERED" }]
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn reply_error(&self, status: u16) {
        Self::text_to_image()
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "id": "req-1",
                "name": "server_error",
                "message": "Engine unavailable"
            })))
            .mount(&self.server)
            .await;
    }
}
