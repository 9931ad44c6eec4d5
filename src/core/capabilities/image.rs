//! Image capability

use std::sync::Arc;

use super::{FailurePolicy, Generated, ImageGenerator, ImageSpec};
use crate::core::providers::ProviderError;
use crate::core::providers::stock_photo::stock_photo_urls;
use crate::utils::error::Result;

/// Image generation with a stock-photo fallback
pub struct ImageCapability {
    generator: Arc<dyn ImageGenerator>,
    failure_policy: FailurePolicy,
    max_images: u32,
}

impl ImageCapability {
    pub fn new(
        generator: Arc<dyn ImageGenerator>,
        failure_policy: FailurePolicy,
        max_images: u32,
    ) -> Self {
        Self {
            generator,
            failure_policy,
            max_images,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.generator.name()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Upper bound for `amount`
    pub fn max_images(&self) -> u32 {
        self.max_images
    }

    /// Generate `spec.count` images
    ///
    /// Under `Fallback` any provider failure other than missing configuration
    /// yields one stock-photo URL per requested image. Partial provider
    /// results are discarded.
    pub async fn generate(&self, spec: &ImageSpec) -> Result<Generated<Vec<String>>> {
        match self.generator.generate(spec).await {
            Ok(images) => Ok(Generated::from_provider(images)),
            Err(err @ ProviderError::Configuration { .. }) => Err(err.into()),
            Err(err) => match self.failure_policy {
                FailurePolicy::Propagate => Err(err.into()),
                FailurePolicy::Fallback => {
                    tracing::warn!(
                        "[{}_IMAGE_ERROR]: {}",
                        self.generator.name().to_uppercase(),
                        err
                    );
                    Ok(Generated::from_fallback(stock_photo_urls(spec)))
                }
            },
        }
    }
}
