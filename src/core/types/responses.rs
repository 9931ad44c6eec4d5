//! Response bodies returned by the generation endpoints

use super::message::MessageRole;
use serde::{Deserialize, Serialize};

/// `/api/code` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeResponse {
    pub role: MessageRole,
    pub content: String,
}

impl CodeResponse {
    pub fn new(content: String) -> Self {
        Self {
            role: MessageRole::Assistant,
            content,
        }
    }
}

/// `/api/conversation` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationResponse {
    pub message: String,
}

/// `/api/image` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub images: Vec<String>,
}

/// `/api/music` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicResponse {
    pub audio: String,
}

/// `/api/video` success body: a bare JSON array holding one URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoResponse(pub Vec<String>);

impl VideoResponse {
    pub fn single(url: impl Into<String>) -> Self {
        Self(vec![url.into()])
    }
}

/// `/api/limit` success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitResponse {
    pub count: u32,
    pub max_free_counts: u32,
    pub is_pro: bool,
}
