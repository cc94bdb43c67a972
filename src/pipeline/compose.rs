//! Slide composition: emit the frames for one section.
//!
//! Each section becomes at most one bullet frame (omitted when the
//! summarizer produced nothing) followed by one frame per asset. Frame
//! titles and bullet text are escaped before emission; asset bodies are
//! already LaTeX and pass through the sanitiser instead.

use crate::config::DeckConfig;
use crate::document::Asset;
use crate::pipeline::sanitize::sanitize_asset;
use std::fmt::Write;

/// Escape markup-significant characters in frame titles.
fn escape_title(text: &str) -> String {
    text.replace('&', r"\&").replace('%', r"\%")
}

/// Escape markup-significant characters in bullet text. Bullets also get
/// `$` escaped: summarizers echo dollar amounts from the narrative, and a
/// lone `$` opens math mode.
fn escape_bullet(text: &str) -> String {
    escape_title(text).replace('$', r"\$")
}

/// Compose the slide source for one section.
///
/// Emits, in order: the bullet-list frame (when `bullets` is non-empty),
/// then one `[shrink]` frame per asset titled
/// `"<title> - <Figure|Table> <n>"` with `n` the 1-based position in this
/// section's asset list.
pub fn compose_section(
    title: &str,
    bullets: &[String],
    assets: &[Asset],
    config: &DeckConfig,
) -> String {
    let mut slides = String::new();
    let safe_title = escape_title(title);

    if !bullets.is_empty() {
        slides.push_str("\\begin{frame}\n");
        let _ = writeln!(slides, "  \\frametitle{{{safe_title}}}");
        slides.push_str("  \\begin{itemize}\n");
        for bullet in bullets {
            let _ = writeln!(slides, "    \\item {}", escape_bullet(bullet));
        }
        slides.push_str("  \\end{itemize}\n");
        slides.push_str("\\end{frame}\n\n");
    }

    for (i, asset) in assets.iter().enumerate() {
        let code = sanitize_asset(&asset.raw_source, config);
        // [shrink] as a safety net; the real resizing work is the
        // adjustbox the sanitiser inserts.
        slides.push_str("\\begin{frame}[shrink]\n");
        let _ = writeln!(
            slides,
            "  \\frametitle{{{safe_title} - {} {}}}",
            asset.kind.label(),
            i + 1
        );
        slides.push_str("  \\vspace{0.2cm}\n");
        slides.push_str(&code);
        slides.push_str("\n\\end{frame}\n\n");
    }

    slides
}
