//! Google Gemini Provider
//!
//! Text generation over the `generateContent` REST endpoint, plus the
//! stock-photo image variant that drives the same endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod images;
pub mod models;

// Re-export main types
pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiErrorMapper;
pub use images::GeminiStockPhotoImages;

/// Provider tag carried by every Gemini error
pub const PROVIDER_NAME: &str = "gemini";
