//! Asset extraction: pull figure/table floats out of section text.
//!
//! Floats confuse summarization backends (a `tabular` body reads as word
//! salad), so they are lifted out verbatim before the narrative goes
//! anywhere near a summarizer, and re-emitted later on their own frames.
//!
//! Two match-and-strip passes over immutable text: figures first, then
//! tables against the figure-stripped result. Asset order is therefore
//! pass order — all figures in source order, then all tables in source
//! order — not the original interleaving.

use crate::document::{Asset, AssetKind};
use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy so adjacent floats capture separately; (?s) because raw
// section text is only single-line after preprocessing, and these
// patterns also serve callers feeding unpreprocessed snippets.
static RE_FIGURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{figure\*?\}.*?\\end\{figure\*?\}").unwrap());
static RE_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\\begin\{table\*?\}.*?\\end\{table\*?\}").unwrap());

/// Split `text` into (asset-free narrative, extracted assets).
///
/// Each float block is recorded verbatim — starred or unstarred — and its
/// span removed from the returned narrative, so re-running extraction on
/// the narrative yields nothing.
pub fn extract_assets(text: &str) -> (String, Vec<Asset>) {
    let mut assets = Vec::new();

    for m in RE_FIGURE.find_iter(text) {
        assets.push(Asset::new(AssetKind::Figure, m.as_str()));
    }
    let without_figures = RE_FIGURE.replace_all(text, "");

    for m in RE_TABLE.find_iter(&without_figures) {
        assets.push(Asset::new(AssetKind::Table, m.as_str()));
    }
    let narrative = RE_TABLE.replace_all(&without_figures, "").into_owned();

    (narrative, assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIG_A: &str = r"\begin{figure}\includegraphics{a.png}\end{figure}";
    const FIG_B: &str = r"\begin{figure*}\includegraphics{b.png}\end{figure*}";
    const TAB_A: &str = r"\begin{table}\begin{tabular}{cc}1 & 2\end{tabular}\end{table}";

    #[test]
    fn figures_then_tables_in_source_order() {
        let text = format!("intro {FIG_A} middle {TAB_A} more {FIG_B} end");
        let (narrative, assets) = extract_assets(&text);

        assert_eq!(assets.len(), 3);
        assert_eq!(assets[0].kind, AssetKind::Figure);
        assert_eq!(assets[0].raw_source, FIG_A);
        assert_eq!(assets[1].kind, AssetKind::Figure);
        assert_eq!(assets[1].raw_source, FIG_B);
        assert_eq!(assets[2].kind, AssetKind::Table);
        assert_eq!(assets[2].raw_source, TAB_A);

        assert!(!narrative.contains(r"\begin{figure"));
        assert!(!narrative.contains(r"\begin{table"));
        assert!(narrative.contains("intro"));
        assert!(narrative.contains("end"));
    }

    #[test]
    fn narrative_is_disjoint_from_assets() {
        let text = format!("a {FIG_A} b {FIG_B} c {TAB_A} d");
        let (narrative, assets) = extract_assets(&text);
        for asset in &assets {
            assert!(!narrative.contains(&asset.raw_source));
        }
    }

    #[test]
    fn re_extraction_finds_nothing() {
        let text = format!("x {FIG_A} y {TAB_A} z");
        let (narrative, _) = extract_assets(&text);
        let (again, none) = extract_assets(&narrative);
        assert!(none.is_empty());
        assert_eq!(again, narrative);
    }

    #[test]
    fn text_without_floats_untouched() {
        let (narrative, assets) = extract_assets("plain prose only");
        assert_eq!(narrative, "plain prose only");
        assert!(assets.is_empty());
    }

    #[test]
    fn adjacent_floats_capture_separately() {
        let text = format!("{FIG_A}{FIG_A}");
        let (_, assets) = extract_assets(&text);
        assert_eq!(assets.len(), 2);
    }

    #[test]
    fn multiline_float_captured() {
        let text = "before \\begin{figure}\n\\includegraphics{x}\n\\end{figure} after";
        let (narrative, assets) = extract_assets(text);
        assert_eq!(assets.len(), 1);
        assert!(assets[0].raw_source.contains('\n'));
        assert_eq!(narrative, "before  after");
    }
}
