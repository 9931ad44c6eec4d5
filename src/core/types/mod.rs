//! Core type definition module
//!
//! Transient per-request values. Nothing here outlives one request.

pub mod message;
pub mod requests;
pub mod responses;

pub use message::{ChatMessage, MessageRole};
pub use requests::{ImageAmount, ImageRequest, MessagesRequest, PromptRequest};
pub use responses::{
    CodeResponse, ConversationResponse, ImageResponse, LimitResponse, MusicResponse,
    VideoResponse,
};
