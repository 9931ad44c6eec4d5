//! Music and video capabilities
//!
//! No live provider backs these; the keyword table is the behaviour.

use crate::core::fallback::{KeywordTable, MUSIC_TABLE, VIDEO_TABLE};

/// Keyword-resolved media capability
#[derive(Debug, Clone, Copy)]
pub struct MediaCapability {
    name: &'static str,
    table: &'static KeywordTable,
}

impl MediaCapability {
    pub fn music() -> Self {
        Self {
            name: "music",
            table: &MUSIC_TABLE,
        }
    }

    pub fn video() -> Self {
        Self {
            name: "video",
            table: &VIDEO_TABLE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// URL for the prompt, or the table default
    pub fn resolve(&self, prompt: &str) -> &'static str {
        match self.table.matching_keyword(prompt) {
            Some((keyword, url)) => {
                tracing::debug!("{} prompt matched keyword '{}'", self.name, keyword);
                url
            }
            None => self.table.default_url(),
        }
    }
}
