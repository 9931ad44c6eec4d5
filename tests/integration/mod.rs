//! Integration tests for genai-gateway
//!
//! Each test builds the full application in-process and talks to it over
//! `actix_web::test`, with upstream providers served by `wiremock`.

pub mod config_tests;
pub mod entitlement_tests;
pub mod error_handling_tests;
pub mod image_tests;
pub mod media_tests;
