//! Metadata extraction: first `\title`/`\author` match, with defaults.
//!
//! Works on the preprocessed blob (single-line, comment-free). Pattern
//! misses are not errors — absent directives fall back to
//! [`DocumentMetadata`]'s defaults, so this stage never fails.

use crate::document::DocumentMetadata;
use crate::pipeline::commands::strip_commands;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\\title\{([^}]*)\}").unwrap());
static RE_AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\\author\{([^}]*)\}").unwrap());

/// Pull title and author from the preprocessed document text.
///
/// First match wins for each directive, matched case-insensitively; each
/// capture is cleaned with [`strip_commands`] before use.
pub fn extract_metadata(clean_text: &str) -> DocumentMetadata {
    let mut meta = DocumentMetadata::default();

    if let Some(caps) = RE_TITLE.captures(clean_text) {
        meta.title = strip_commands(&caps[1]);
    }
    if let Some(caps) = RE_AUTHOR.captures(clean_text) {
        meta.author = strip_commands(&caps[1]);
    }
    meta
}
