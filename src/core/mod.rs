//! Core functionality for the Gateway
//!
//! Request types, validation, capabilities and the provider adapters they
//! drive. Nothing here knows about HTTP.

pub mod capabilities;
pub mod fallback;
pub mod formatter;
pub mod providers;
pub mod types;
pub mod validation;
