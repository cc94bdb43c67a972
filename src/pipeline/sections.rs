//! Section splitting: locate the document body and segment it.
//!
//! The body is whatever sits between `\begin{document}` and
//! `\end{document}`; without that pair there is nothing to present and
//! the stage returns an empty list rather than failing — downstream
//! simply produces a preamble-only deck.
//!
//! Text before the first `\section` header (abstract, preface) becomes a
//! synthetic context section when it is long enough to be worth a slide.
//! Bibliography-like sections are dropped: a wall of citations never
//! belongs on a slide.

use crate::config::DeckConfig;
use crate::document::Section;
use crate::pipeline::assets::extract_assets;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{document\}(.*?)\\end\{document\}").unwrap());
static RE_SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\section\{([^}]*)\}").unwrap());

/// Split the preprocessed document into ordered sections.
///
/// Every captured (title, content) pair runs through asset extraction
/// first; pairs whose title matches a bibliography marker are then
/// discarded entirely. Output order is document order — no pass reorders
/// sections.
pub fn split_sections(clean_text: &str, config: &DeckConfig) -> Vec<Section> {
    let Some(body_caps) = RE_BODY.captures(clean_text) else {
        return Vec::new();
    };
    let body = body_caps
        .get(1)
        .expect("body capture group always present")
        .as_str();

    let headers: Vec<(std::ops::Range<usize>, String)> = RE_SECTION
        .captures_iter(body)
        .map(|caps| {
            let whole = caps.get(0).expect("match always has a full capture");
            (whole.range(), caps[1].trim().to_string())
        })
        .collect();

    let mut sections = Vec::new();

    // Pre-header content: abstract / preface, kept only when substantial.
    let preface_end = headers.first().map_or(body.len(), |(r, _)| r.start);
    let preface = body[..preface_end].trim();
    if preface.len() > config.context_min_chars {
        let (narrative, assets) = extract_assets(preface);
        sections.push(Section {
            title: config.context_title.clone(),
            narrative,
            assets,
        });
    }

    for (i, (range, title)) in headers.iter().enumerate() {
        let content_end = headers.get(i + 1).map_or(body.len(), |(r, _)| r.start);
        let raw_content = body[range.end..content_end].trim();

        let (narrative, assets) = extract_assets(raw_content);
        if config.is_bibliography_title(title) {
            continue;
        }
        sections.push(Section {
            title: title.clone(),
            narrative,
            assets,
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(content: &str) -> String {
        format!(r"\documentclass{{article}} \begin{{document}} {content} \end{{document}}")
    }

    #[test]
    fn sections_split_in_document_order() {
        let text = body(r"\section{Introduction} intro text \section{Methods} methods text");
        let sections = split_sections(&text, &DeckConfig::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[0].narrative, "intro text");
        assert_eq!(sections[1].title, "Methods");
        assert_eq!(sections[1].narrative, "methods text");
    }

    #[test]
    fn bibliography_sections_filtered_order_preserved() {
        let text = body(
            r"\section{Introduction} a \section{Related Work} b \section{References} c",
        );
        let titles: Vec<String> = split_sections(&text, &DeckConfig::default())
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Introduction", "Related Work"]);
    }

    #[test]
    fn missing_document_body_yields_empty_list() {
        let text = r"\section{Orphan} content without a document environment";
        assert!(split_sections(text, &DeckConfig::default()).is_empty());
    }

    #[test]
    fn short_preface_dropped() {
        let preface = "x".repeat(40);
        let text = body(&format!(r"{preface} \section{{One}} content"));
        let sections = split_sections(&text, &DeckConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "One");
    }

    #[test]
    fn long_preface_becomes_context_section() {
        let preface = "x".repeat(80);
        let text = body(&format!(r"{preface} \section{{One}} content"));
        let sections = split_sections(&text, &DeckConfig::default());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Context");
        assert_eq!(sections[0].narrative, preface);
        assert_eq!(sections[1].title, "One");
    }

    #[test]
    fn section_assets_extracted_from_content() {
        let fig = r"\begin{figure}\includegraphics{a}\end{figure}";
        let text = body(&format!(r"\section{{Results}} prose {fig} more prose"));
        let sections = split_sections(&text, &DeckConfig::default());
        assert_eq!(sections[0].assets.len(), 1);
        assert!(!sections[0].narrative.contains(r"\begin{figure}"));
        assert!(sections[0].narrative.contains("prose"));
    }

    #[test]
    fn body_with_no_headers_and_long_text_is_context_only() {
        let long = "word ".repeat(30);
        let text = body(&long);
        let sections = split_sections(&text, &DeckConfig::default());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Context");
    }
}
