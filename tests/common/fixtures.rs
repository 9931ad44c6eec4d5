//! Configuration fixtures
//!
//! `TestConfig` starts from the defaults with one api-key caller and one
//! subscriber registered. Providers point nowhere until a mock is attached.

use genai_gateway::Config;
use genai_gateway::config::AuthMode;
use genai_gateway::core::capabilities::FailurePolicy;
use genai_gateway::core::providers::ImageProviderKind;
use genai_gateway::services::entitlement::QuotaIncrementPolicy;

use super::providers::{MockGemini, MockStability};

/// Key of the regular free-tier caller
pub const TEST_API_KEY: &str = "sk-test";
/// User behind `TEST_API_KEY`
pub const TEST_USER: &str = "user_1";
/// Key of a second free-tier caller
pub const OTHER_API_KEY: &str = "sk-other";
/// Key of the subscribed caller
pub const SUBSCRIBER_KEY: &str = "sk-pro";
/// User behind `SUBSCRIBER_KEY`
pub const SUBSCRIBER: &str = "pro_user";

/// Key the mock Gemini server expects
pub const TEST_GEMINI_KEY: &str = "gemini-test-key";
/// Key the mock Stability server expects
pub const TEST_STABILITY_KEY: &str = "stability-test-key";

/// Builder over `Config` for integration tests
pub struct TestConfig {
    config: Config,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfig {
    pub fn new() -> Self {
        let mut config = Config::default();
        let auth = &mut config.gateway.auth;
        auth.api_keys.insert(TEST_API_KEY.to_string(), TEST_USER.to_string());
        auth.api_keys.insert(OTHER_API_KEY.to_string(), "user_2".to_string());
        auth.api_keys.insert(SUBSCRIBER_KEY.to_string(), SUBSCRIBER.to_string());
        config
            .gateway
            .entitlement
            .subscribers
            .push(SUBSCRIBER.to_string());
        // Nothing listens here; tests that reach Gemini attach a mock
        config.gateway.providers.gemini.base_url = "http://127.0.0.1:9".to_string();
        config.gateway.providers.gemini.request_timeout = 5;
        Self { config }
    }

    /// Route Gemini calls to `mock` with a valid key
    pub fn gemini(mut self, mock: &MockGemini) -> Self {
        let gemini = &mut self.config.gateway.providers.gemini;
        gemini.base_url = mock.uri();
        gemini.api_key = Some(TEST_GEMINI_KEY.to_string());
        self
    }

    /// Use Stability for images, routed to `mock` with a valid key
    pub fn stability(mut self, mock: &MockStability) -> Self {
        let stability = &mut self.config.gateway.providers.stability;
        stability.base_url = mock.uri();
        stability.api_key = Some(TEST_STABILITY_KEY.to_string());
        stability.request_timeout = 5;
        self.config.gateway.capabilities.image.provider = ImageProviderKind::Stability;
        self
    }

    pub fn without_gemini_key(mut self) -> Self {
        self.config.gateway.providers.gemini.api_key = None;
        self
    }

    pub fn max_free_counts(mut self, count: u32) -> Self {
        self.config.gateway.entitlement.max_free_counts = count;
        self
    }

    pub fn quota_increment(mut self, policy: QuotaIncrementPolicy) -> Self {
        self.config.gateway.entitlement.quota_increment = policy;
        self
    }

    pub fn image_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.gateway.capabilities.image.failure_policy = policy;
        self
    }

    pub fn chat_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.config.gateway.capabilities.code.failure_policy = Some(policy);
        self.config.gateway.capabilities.conversation.failure_policy = Some(policy);
        self
    }

    /// Trust the `x-user-id` header instead of api keys
    pub fn header_auth(mut self) -> Self {
        self.config.gateway.auth.mode = AuthMode::Header;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
