//! Request bodies accepted by the generation endpoints
//!
//! Every field is optional at the serde layer; presence is checked by
//! `core::validation` so that a missing field yields the right message.

use super::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// Body of `/api/code` and `/api/conversation`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

/// Number of images, sent either as `"2"` or `2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageAmount {
    Number(u64),
    Text(String),
}

impl Default for ImageAmount {
    fn default() -> Self {
        Self::Text("1".to_string())
    }
}

/// Body of `/api/image`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub amount: Option<ImageAmount>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Body of `/api/music` and `/api/video`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}
