//! Markdown restructuring for conversation replies
//!
//! Turns long, unstructured paragraphs into a heading followed by bullets.
//! Purely textual: abbreviations and decimals like "3.5 stars" can split a
//! sentence in the wrong place.

use once_cell::sync::Lazy;
use regex::Regex;

/// Paragraphs shorter than this pass through untouched
pub const MIN_BULLET_PARAGRAPH_LEN: usize = 100;

/// Minimum sentence count before a paragraph is bulleted
pub const MIN_BULLET_SENTENCES: usize = 3;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\s+").expect("Invalid sentence boundary regex"));

/// Whether the text already carries list or heading markers
pub fn has_markdown_structure(text: &str) -> bool {
    text.contains("- ") || text.contains("* ") || text.contains('#')
}

/// Restructure freeform text into headings and bullets
///
/// Text that already has markdown structure is returned as is, which makes
/// the function idempotent on structured input.
pub fn format_for_interactivity(text: &str) -> String {
    if has_markdown_structure(text) {
        return text.to_string();
    }

    let paragraphs: Vec<&str> = text
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .collect();

    if paragraphs.len() <= 1 {
        return text.to_string();
    }

    let mut formatted = String::with_capacity(text.len() + 64);

    for (index, paragraph) in paragraphs.iter().enumerate() {
        // The opening paragraph is usually an introduction
        if index == 0 || paragraph.chars().count() < MIN_BULLET_PARAGRAPH_LEN {
            formatted.push_str(paragraph);
            formatted.push_str("\n\n");
            continue;
        }

        let sentences: Vec<&str> = SENTENCE_BOUNDARY.split(paragraph).collect();
        if sentences.len() < MIN_BULLET_SENTENCES {
            formatted.push_str(paragraph);
            formatted.push_str("\n\n");
            continue;
        }

        formatted.push_str("## ");
        formatted.push_str(sentences[0].trim());
        formatted.push_str("\n\n");

        let last = sentences.len() - 1;
        for (position, sentence) in sentences.iter().enumerate().skip(1) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            formatted.push_str("- ");
            formatted.push_str(sentence);
            // The split consumed one period from every sentence but the last
            if position != last || !sentence.ends_with('.') {
                formatted.push('.');
            }
            formatted.push('\n');
        }
        formatted.push('\n');
    }

    formatted.trim().to_string()
}
