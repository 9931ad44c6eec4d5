//! Utility modules for the Gateway
//!
//! - **error**: the `GatewayError` type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
