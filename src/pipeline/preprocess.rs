//! Preprocessing: strip comments and normalise whitespace.
//!
//! Must run before any structural extraction — every downstream pattern
//! assumes a single-line text stream, so newlines (and the comments that
//! would otherwise swallow real content up to them) have to go first.
//!
//! Both rules are pure `&str -> String` passes with no shared state.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Comment removal followed by whitespace normalisation.
pub fn preprocess(input: &str) -> String {
    collapse_whitespace(&strip_comments(input))
}

/// Remove every `%` comment together with the rest of its line.
///
/// A `%` immediately preceded by a backslash is an escaped percent sign
/// and survives, along with the text after it. The terminating newline of
/// a removed comment is kept so the following line stays separate until
/// [`collapse_whitespace`] runs.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    let mut in_comment = false;

    for c in input.chars() {
        if in_comment {
            if c == '\n' {
                in_comment = false;
                out.push('\n');
                prev = Some('\n');
            }
            continue;
        }
        if c == '%' && prev != Some('\\') {
            in_comment = true;
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Collapse every whitespace run (newlines included) to a single space and
/// trim the ends.
pub fn collapse_whitespace(input: &str) -> String {
    RE_WHITESPACE.replace_all(input, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescaped_comment_removed_to_end_of_line() {
        let input = "kept % dropped entirely\nnext line";
        assert_eq!(preprocess(input), "kept next line");
    }

    #[test]
    fn escaped_percent_preserved() {
        let input = r"rate of 95\% improvement";
        assert_eq!(preprocess(input), r"rate of 95\% improvement");
    }

    #[test]
    fn escaped_percent_keeps_rest_of_line() {
        let input = "a \\% b % gone\nc";
        assert_eq!(preprocess(input), "a \\% b c");
    }

    #[test]
    fn comment_only_line_does_not_join_neighbours() {
        let input = "alpha\n% full comment line\nbeta";
        assert_eq!(preprocess(input), "alpha beta");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_space() {
        let input = "a  b\t\tc\n\nd";
        assert_eq!(collapse_whitespace(input), "a b c d");
    }

    #[test]
    fn leading_and_trailing_whitespace_trimmed() {
        assert_eq!(collapse_whitespace("  hello  "), "hello");
    }

    #[test]
    fn percent_at_line_start_removes_whole_line() {
        let input = "% comment\ntext";
        assert_eq!(preprocess(input), "text");
    }
}
