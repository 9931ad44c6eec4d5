//! Code and conversation capabilities
//!
//! Both are a single chat-session call: every message but the last is
//! history, and the last becomes the prompt behind a fixed instruction.

use std::sync::Arc;

use super::{FailurePolicy, GenerationSettings, Generated, TextGenerationRequest, TextGenerator};
use crate::config::models::capability::ChatCapabilityConfig;
use crate::core::formatter::format_for_interactivity;
use crate::core::providers::ProviderError;
use crate::core::types::ChatMessage;
use crate::utils::error::Result;

/// Default chat model
pub const DEFAULT_CHAT_MODEL: &str = "gemini-1.5-pro";

const CODE_INSTRUCTION: &str = "You are an expert programmer. Please provide clean, efficient, and well-commented code for the following request. Format your response with proper markdown code blocks using triple backticks with the appropriate language identifier. Focus only on the code implementation without unnecessary explanations: ";

const CONVERSATION_INSTRUCTION: &str = "Please respond to this in an interactive, conversational way with clear sections and bullet points where appropriate: ";

/// Which chat capability this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatKind {
    Code,
    Conversation,
}

impl ChatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::Code => "code",
            ChatKind::Conversation => "conversation",
        }
    }

    /// Prefix placed before the final user message
    pub fn instruction(&self) -> &'static str {
        match self {
            ChatKind::Code => CODE_INSTRUCTION,
            ChatKind::Conversation => CONVERSATION_INSTRUCTION,
        }
    }

    pub fn default_settings(&self) -> GenerationSettings {
        let temperature = match self {
            ChatKind::Code => 0.2,
            ChatKind::Conversation => 0.7,
        };
        GenerationSettings {
            temperature,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: None,
        }
    }

    /// Reply used under `FailurePolicy::Fallback`
    pub fn placeholder(&self) -> &'static str {
        match self {
            ChatKind::Code => {
                "// Code generation is temporarily unavailable. Please try again in a moment."
            }
            ChatKind::Conversation => {
                "I'm having trouble reaching the model right now. Please try again in a moment."
            }
        }
    }
}

impl std::fmt::Display for ChatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chat-backed capability
pub struct ChatCapability {
    kind: ChatKind,
    generator: Arc<dyn TextGenerator>,
    model: String,
    settings: GenerationSettings,
    failure_policy: FailurePolicy,
}

impl ChatCapability {
    /// Build from config, filling unset fields with the defaults for `kind`
    pub fn new(
        kind: ChatKind,
        generator: Arc<dyn TextGenerator>,
        config: &ChatCapabilityConfig,
    ) -> Self {
        let defaults = kind.default_settings();
        Self {
            kind,
            generator,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            settings: GenerationSettings {
                temperature: config.temperature.unwrap_or(defaults.temperature),
                top_p: config.top_p.unwrap_or(defaults.top_p),
                top_k: config.top_k.unwrap_or(defaults.top_k),
                max_output_tokens: config.max_output_tokens.or(defaults.max_output_tokens),
            },
            failure_policy: config.failure_policy.unwrap_or(FailurePolicy::Propagate),
        }
    }

    pub fn kind(&self) -> ChatKind {
        self.kind
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn settings(&self) -> GenerationSettings {
        self.settings
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Split the conversation into history and the instructed prompt
    pub fn build_request(&self, mut messages: Vec<ChatMessage>) -> TextGenerationRequest {
        let last = messages.pop().map(|m| m.content).unwrap_or_default();
        TextGenerationRequest {
            model: self.model.clone(),
            history: messages,
            prompt: format!("{}{}", self.kind.instruction(), last),
            settings: self.settings,
        }
    }

    /// Run one turn. Missing provider configuration always propagates.
    pub async fn respond(&self, messages: Vec<ChatMessage>) -> Result<Generated<String>> {
        let request = self.build_request(messages);

        match self.generator.generate(request).await {
            Ok(text) => Ok(Generated::from_provider(self.postprocess(text))),
            Err(err @ ProviderError::Configuration { .. }) => Err(err.into()),
            Err(err) => match self.failure_policy {
                FailurePolicy::Propagate => Err(err.into()),
                FailurePolicy::Fallback => {
                    tracing::warn!(
                        "[{}_{}_ERROR]: {}",
                        self.generator.name().to_uppercase(),
                        self.kind.as_str().to_uppercase(),
                        err
                    );
                    Ok(Generated::from_fallback(self.kind.placeholder().to_string()))
                }
            },
        }
    }

    fn postprocess(&self, text: String) -> String {
        match self.kind {
            ChatKind::Code => text,
            ChatKind::Conversation => format_for_interactivity(&text),
        }
    }
}
