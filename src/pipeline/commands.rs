//! Command stripping: remove formatting wrappers from captured fragments.
//!
//! Title and author captures arrive wrapped in formatting commands —
//! `\textbf{...}`, IEEE author-block markers, manual line breaks. This
//! pass removes the markup tokens and keeps the enclosed text, in a fixed
//! order: named wrappers first, then the author separator, then any
//! remaining backslash tokens, then leftover grouping braces, and a final
//! whitespace normalisation.
//!
//! Idempotent: clean text has no backslashes or braces left, so a second
//! application is a no-op. Semantic content is never deleted, only markup.

use crate::pipeline::preprocess::collapse_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_AUTHOR_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\IEEEauthorblock[NA]\{").unwrap());
static RE_FORMAT_WRAPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(?:textbf|textit|emph)\{").unwrap());
static RE_AND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\and").unwrap());

/// Strip formatting wrappers from `text`, leaving the enclosed content.
pub fn strip_commands(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Named wrappers: drop the command and its opening brace, keep the
    // content. The orphaned closing brace falls to the brace sweep below.
    let text = RE_AUTHOR_BLOCK.replace_all(text, "");
    let text = RE_FORMAT_WRAPPER.replace_all(&text, "");

    // Author separator becomes a comma.
    let text = RE_AND.replace_all(&text, ", ");

    // Remaining backslash tokens are manual line breaks or unknown
    // commands; a space keeps adjacent words apart.
    let text = text.replace('\\', " ");

    let text = text.replace(['{', '}'], "");

    collapse_whitespace(&text)
}
