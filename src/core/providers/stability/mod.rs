//! Stability AI Provider
//!
//! Text-to-image through the v1 generation REST API. Images come back as
//! base64 artifacts and are returned to callers as `data:` URIs.

pub mod client;
pub mod config;
pub mod models;

pub use client::StabilityClient;
pub use config::StabilityConfig;

/// Provider tag carried by every Stability error
pub const PROVIDER_NAME: &str = "stability";

/// Message used when no usable key is configured
pub const MISSING_KEY_MESSAGE: &str = "Stability API Key is required";
