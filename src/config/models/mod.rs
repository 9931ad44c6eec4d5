//! Configuration data models
//!
//! One struct per YAML section. Every field has a serde default so a
//! partial file, or no file at all, yields a runnable configuration.

pub mod auth;
pub mod capability;
pub mod entitlement;
pub mod gateway;
pub mod provider;
pub mod server;

// Re-export all configuration types
pub use auth::*;
pub use capability::*;
pub use entitlement::*;
pub use gateway::*;
pub use provider::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default free calls per user
pub fn default_max_free_counts() -> u32 {
    5
}

/// Default upper bound for images per request
pub fn default_max_images() -> u32 {
    4
}

/// Default header for trusted-proxy identity
pub fn default_user_header() -> String {
    "x-user-id".to_string()
}
