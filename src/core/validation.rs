//! Request validation for the generation endpoints
//!
//! Validation never performs I/O. Each function consumes the raw body and
//! returns the typed input the capability needs, or a 400-class error.

use crate::core::capabilities::{ImageSpec, Resolution};
use crate::core::types::{ChatMessage, ImageAmount, ImageRequest, MessagesRequest, PromptRequest};
use crate::utils::error::{GatewayError, Result};

/// Default number of images when `amount` is omitted
pub const DEFAULT_IMAGE_AMOUNT: u32 = 1;

/// Default resolution when `resolution` is omitted
pub const DEFAULT_RESOLUTION: &str = "512x512";

/// Request validation utilities
pub struct RequestValidator;

impl RequestValidator {
    /// Require a non-empty message history
    pub fn validate_messages(request: MessagesRequest) -> Result<Vec<ChatMessage>> {
        match request.messages {
            Some(messages) if !messages.is_empty() => Ok(messages),
            _ => Err(GatewayError::messages_required()),
        }
    }

    /// Require a prompt with at least one non-whitespace character
    pub fn validate_prompt(request: PromptRequest) -> Result<String> {
        Self::require_prompt(request.prompt)
    }

    /// Validate prompt, amount and resolution of an image request
    pub fn validate_image_request(request: ImageRequest, max_images: u32) -> Result<ImageSpec> {
        let prompt = Self::require_prompt(request.prompt)?;
        let count = Self::parse_amount(request.amount.as_ref(), max_images)?;
        let resolution = Self::parse_resolution(
            request
                .resolution
                .as_deref()
                .unwrap_or(DEFAULT_RESOLUTION),
        )?;

        Ok(ImageSpec {
            prompt,
            count,
            resolution,
        })
    }

    fn require_prompt(prompt: Option<String>) -> Result<String> {
        match prompt {
            Some(prompt) if !prompt.trim().is_empty() => Ok(prompt),
            _ => Err(GatewayError::prompt_required()),
        }
    }

    /// Parse `amount`, accepting numbers and numeric strings
    pub fn parse_amount(amount: Option<&ImageAmount>, max_images: u32) -> Result<u32> {
        let count = match amount {
            None => DEFAULT_IMAGE_AMOUNT as u64,
            Some(ImageAmount::Number(n)) => *n,
            Some(ImageAmount::Text(text)) => text.trim().parse::<u64>().map_err(|_| {
                GatewayError::validation(format!("Amount must be a whole number, got '{}'.", text))
            })?,
        };

        if count == 0 || count > max_images as u64 {
            return Err(GatewayError::validation(format!(
                "Amount must be between 1 and {}.",
                max_images
            )));
        }

        Ok(count as u32)
    }

    /// Parse `<width>x<height>` into a resolution
    pub fn parse_resolution(resolution: &str) -> Result<Resolution> {
        let invalid = || {
            GatewayError::validation(format!(
                "Resolution must look like {}, got '{}'.",
                DEFAULT_RESOLUTION, resolution
            ))
        };

        let (width, height) = resolution.trim().split_once('x').ok_or_else(invalid)?;
        let width: u32 = width.parse().map_err(|_| invalid())?;
        let height: u32 = height.parse().map_err(|_| invalid())?;

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Resolution { width, height })
    }
}
