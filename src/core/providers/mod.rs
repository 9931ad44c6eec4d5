//! Provider adapters
//!
//! Each adapter translates a validated request into one third-party API
//! call and maps the response envelope back. Capabilities only see them
//! through the `TextGenerator` and `ImageGenerator` traits.

pub mod gemini;
pub mod stability;
pub mod stock_photo;
pub mod unified_provider;

pub use unified_provider::ProviderError;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::capabilities::ImageGenerator;
use gemini::{GeminiClient, GeminiStockPhotoImages};
use stability::{StabilityClient, StabilityConfig};

/// Image provider variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageProviderKind {
    /// Gemini text call followed by a stock-photo URL
    #[default]
    GeminiStockPhoto,
    /// Stability text-to-image
    Stability,
}

impl ImageProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageProviderKind::GeminiStockPhoto => "gemini_stock_photo",
            ImageProviderKind::Stability => "stability",
        }
    }
}

impl std::fmt::Display for ImageProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the configured image adapter
///
/// The Gemini variant shares the chat client so both capabilities reuse one
/// connection pool.
pub fn create_image_generator(
    kind: ImageProviderKind,
    gemini: Arc<GeminiClient>,
    image_model: &str,
    stability: &StabilityConfig,
) -> Result<Arc<dyn ImageGenerator>, ProviderError> {
    let generator: Arc<dyn ImageGenerator> = match kind {
        ImageProviderKind::GeminiStockPhoto => {
            Arc::new(GeminiStockPhotoImages::new(gemini, image_model))
        }
        ImageProviderKind::Stability => Arc::new(StabilityClient::new(stability.clone())?),
    };
    Ok(generator)
}
