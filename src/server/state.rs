//! Application state shared across HTTP handlers

use crate::auth::{IdentityProvider, create_identity_provider};
use crate::config::Config;
use crate::core::capabilities::{ChatCapability, ChatKind, ImageCapability, MediaCapability};
use crate::core::providers::create_image_generator;
use crate::core::providers::gemini::GeminiClient;
use crate::services::entitlement::{EntitlementGate, create_entitlement_gate};
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything is built once at startup and shared read-only; the quota
/// counters behind `gate` are the only mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Caller identity
    pub identity: Arc<dyn IdentityProvider>,
    /// Quota and subscription gate
    pub gate: Arc<EntitlementGate>,
    pub code: Arc<ChatCapability>,
    pub conversation: Arc<ChatCapability>,
    pub image: Arc<ImageCapability>,
    pub music: MediaCapability,
    pub video: MediaCapability,
}

impl AppState {
    /// Assemble state from already-built parts
    pub fn new(
        config: Config,
        identity: Arc<dyn IdentityProvider>,
        gate: EntitlementGate,
        code: ChatCapability,
        conversation: ChatCapability,
        image: ImageCapability,
    ) -> Self {
        Self {
            config: Arc::new(config),
            identity,
            gate: Arc::new(gate),
            code: Arc::new(code),
            conversation: Arc::new(conversation),
            image: Arc::new(image),
            music: MediaCapability::music(),
            video: MediaCapability::video(),
        }
    }

    /// Build every adapter and collaborator described by `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let gemini = Arc::new(GeminiClient::new(config.providers().gemini.clone())?);
        let capabilities = config.capabilities();

        let code = ChatCapability::new(ChatKind::Code, gemini.clone(), &capabilities.code);
        let conversation = ChatCapability::new(
            ChatKind::Conversation,
            gemini.clone(),
            &capabilities.conversation,
        );

        let image_generator = create_image_generator(
            capabilities.image.provider,
            gemini,
            &capabilities.image.model,
            &config.providers().stability,
        )?;
        let image = ImageCapability::new(
            image_generator,
            capabilities.image.failure_policy,
            capabilities.image.max_images,
        );

        let identity = create_identity_provider(config.auth());
        let gate = create_entitlement_gate(config.entitlement());

        Ok(Self::new(config, identity, gate, code, conversation, image))
    }
}
