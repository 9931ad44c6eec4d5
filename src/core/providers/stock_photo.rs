//! Stock-photo URLs
//!
//! Deterministic image URLs keyed by prompt and size. Used by the Gemini
//! image variant and as the image fallback.

use crate::core::capabilities::{ImageSpec, Resolution};

/// Random-photo endpoint; the query string is the search term
pub const STOCK_PHOTO_BASE_URL: &str = "https://source.unsplash.com/random";

/// `https://source.unsplash.com/random/{w}x{h}/?{prompt}` with the prompt percent-encoded
pub fn stock_photo_url(prompt: &str, resolution: Resolution) -> String {
    format!(
        "{}/{}/?{}",
        STOCK_PHOTO_BASE_URL,
        resolution,
        urlencoding::encode(prompt)
    )
}

/// One URL per requested image
pub fn stock_photo_urls(spec: &ImageSpec) -> Vec<String> {
    let url = stock_photo_url(&spec.prompt, spec.resolution);
    vec![url; spec.count as usize]
}
