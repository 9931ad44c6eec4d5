//! Error handling for the gateway
//!
//! `GatewayError` is the single error type that crosses the HTTP boundary.
//! Provider adapters return `ProviderError`, which converts into it.

mod conversions;
mod helpers;
mod response;
mod types;


pub use types::{GatewayError, Result};
