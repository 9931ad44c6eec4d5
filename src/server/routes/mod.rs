//! HTTP route modules

pub mod api;
