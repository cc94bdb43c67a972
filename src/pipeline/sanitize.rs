//! Asset sanitisation: rewrite float source for slide-sized rendering.
//!
//! Article floats assume a full page: starred variants span two columns,
//! placement hints steer the float around text, and tables grow to
//! whatever the page allows. None of that survives contact with a fixed
//! 4:3 frame, so four rewrites run in order:
//!
//! 1. `figure*`/`table*` → unstarred (Beamer has no column layout)
//! 2. drop `[htbp]`-style placement specifiers after the float opener
//! 3. wrap the `tabular` block in an `adjustbox` capped to the text area
//! 4. insert `\centering` right after the opener when absent
//!
//! Every rule guards on its own postcondition, so sanitising already
//! sanitised source changes nothing.

use crate::config::DeckConfig;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_PLACEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{(figure|table)\}(\[.*?\])?").unwrap());
// Lazy match stops at the first '}', i.e. right after `\begin{tabular}`,
// leaving the column specification in place.
static RE_TABULAR_BEGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\\begin\{tabular.*?\})").unwrap());

/// Rewrite one float's raw source for safe embedding in a frame.
pub fn sanitize_asset(raw: &str, config: &DeckConfig) -> String {
    // 1. Starred variants to their unstarred form.
    let mut code = raw.replace("figure*", "figure").replace("table*", "table");

    // 2. Placement specifiers.
    code = RE_PLACEMENT.replace_all(&code, r"\begin{${1}}").into_owned();

    // 3. Tabular scaling.
    if code.contains("tabular") && !code.contains("adjustbox") {
        let opener = format!(
            "\\begin{{adjustbox}}{{max width=\\textwidth, max height={}\\textheight}}\n${{1}}",
            config.table_max_height
        );
        code = RE_TABULAR_BEGIN.replace_all(&code, opener.as_str()).into_owned();
        code = code.replace("\\end{tabular}", "\\end{tabular}\n\\end{adjustbox}");
    }

    // 4. Centering.
    if !code.contains("\\centering") {
        code = code.replace("\\begin{figure}", "\\begin{figure}\\centering");
        code = code.replace("\\begin{table}", "\\begin{table}\\centering");
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DeckConfig {
        DeckConfig::default()
    }

    #[test]
    fn starred_environments_unstarred() {
        let out = sanitize_asset(
            r"\begin{figure*}\includegraphics{a}\end{figure*}",
            &config(),
        );
        assert!(out.contains(r"\begin{figure}"));
        assert!(!out.contains("figure*"));
    }

    #[test]
    fn placement_specifiers_removed() {
        let out = sanitize_asset(
            r"\begin{table}[htbp]\centering\begin{tabular}{cc}a & b\end{tabular}\end{table}",
            &config(),
        );
        assert!(!out.contains("[htbp]"));
        assert!(out.contains(r"\begin{table}"));
    }

    #[test]
    fn tabular_wrapped_in_adjustbox() {
        let out = sanitize_asset(
            r"\begin{table}\centering\begin{tabular}{|c|c|}1 & 2\end{tabular}\end{table}",
            &config(),
        );
        assert!(out.contains(r"\begin{adjustbox}{max width=\textwidth, max height=0.75\textheight}"));
        // Column spec survives the wrap.
        assert!(out.contains(r"\begin{tabular}{|c|c|}"));
        assert!(out.contains("\\end{tabular}\n\\end{adjustbox}"));
    }

    #[test]
    fn existing_adjustbox_not_rewrapped() {
        let once = sanitize_asset(
            r"\begin{table}\centering\begin{tabular}{cc}1 & 2\end{tabular}\end{table}",
            &config(),
        );
        let twice = sanitize_asset(&once, &config());
        assert_eq!(twice.matches("adjustbox").count(), 2); // one begin, one end
    }

    #[test]
    fn centering_inserted_when_missing() {
        let out = sanitize_asset(r"\begin{figure}\includegraphics{a}\end{figure}", &config());
        assert!(out.contains(r"\begin{figure}\centering"));
    }

    #[test]
    fn centering_not_duplicated() {
        let out = sanitize_asset(
            r"\begin{figure}\centering\includegraphics{a}\end{figure}",
            &config(),
        );
        assert_eq!(out.matches(r"\centering").count(), 1);
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in [
            r"\begin{figure*}[t!]\includegraphics{a}\end{figure*}",
            r"\begin{table}[h]\begin{tabular}{cc}1 & 2\end{tabular}\end{table}",
            r"\begin{figure}\centering\includegraphics{b}\end{figure}",
        ] {
            let once = sanitize_asset(raw, &config());
            let twice = sanitize_asset(&once, &config());
            assert_eq!(once, twice, "second pass changed: {raw}");
        }
    }

    #[test]
    fn table_height_fraction_comes_from_config() {
        let cfg = DeckConfig::builder().table_max_height(0.5).build().unwrap();
        let out = sanitize_asset(
            r"\begin{table}\begin{tabular}{c}x\end{tabular}\end{table}",
            &cfg,
        );
        assert!(out.contains(r"max height=0.5\textheight"));
    }
}
