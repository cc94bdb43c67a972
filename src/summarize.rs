//! The summarization capability consumed by the pipeline.
//!
//! Turning a section's narrative into bullet points is the only
//! long-latency, backend-dependent step of the conversion, so it is kept
//! behind the single-method [`Summarizer`] trait: any concrete backend — a
//! local model, a remote API, a test stub — satisfies it identically, and a
//! plain closure works via the blanket impl. No variant class hierarchy,
//! no backend code in the core.
//!
//! Two helpers recover behaviour every real backend ends up needing:
//! [`LeadSummarizer`] is a deterministic extractive fallback that needs no
//! model at all, and [`bullets_from_model_output`] turns the raw text a
//! chat model returns into a clean ordered bullet list.

use thiserror::Error;

/// Error returned by a [`Summarizer`] backend.
///
/// Deliberately opaque: the pipeline treats any backend failure the same
/// way (record a [`crate::error::SectionError`], keep going), so one
/// message string is all the structure required.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SummarizeError {
    pub message: String,
}

impl SummarizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A summarization backend: narrative text in, ordered sentences out.
///
/// The core imposes no constraint on sentence count or length — whatever
/// the backend returns is passed directly to the slide composer.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<Vec<String>, SummarizeError>;
}

/// Closures are summarizers, so ad-hoc backends plug in without a type:
///
/// ```rust
/// use tex2beamer::summarize::{Summarizer, SummarizeError};
///
/// let stub = |text: &str| -> Result<Vec<String>, SummarizeError> {
///     Ok(vec![format!("{} words.", text.split_whitespace().count())])
/// };
/// assert_eq!(stub.summarize("one two three").unwrap(), vec!["3 words."]);
/// ```
impl<F> Summarizer for F
where
    F: Fn(&str) -> Result<Vec<String>, SummarizeError>,
{
    fn summarize(&self, text: &str) -> Result<Vec<String>, SummarizeError> {
        self(text)
    }
}

/// Deterministic extractive summarizer: the leading sentences of the
/// narrative, cleaned up for slide use.
///
/// Academic prose front-loads its point, so the first few sentences of a
/// section are a serviceable summary when no model backend is configured.
/// Text under [`LeadSummarizer::PASSTHROUGH_WORDS`] words is already
/// slide-sized and is returned whole as a single bullet.
#[derive(Debug, Clone)]
pub struct LeadSummarizer {
    /// Maximum bullets returned per section.
    pub max_bullets: usize,
}

impl LeadSummarizer {
    /// Texts shorter than this many words skip sentence selection.
    pub const PASSTHROUGH_WORDS: usize = 40;

    pub fn new(max_bullets: usize) -> Self {
        Self {
            max_bullets: max_bullets.max(1),
        }
    }
}

impl Default for LeadSummarizer {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Summarizer for LeadSummarizer {
    fn summarize(&self, text: &str) -> Result<Vec<String>, SummarizeError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        if text.split_whitespace().count() < Self::PASSTHROUGH_WORDS {
            return Ok(vec![text.to_string()]);
        }

        let bullets: Vec<String> = split_sentences(text)
            .into_iter()
            .filter(|s| s.len() > 5)
            .take(self.max_bullets)
            .map(ensure_terminator)
            .collect();
        Ok(bullets)
    }
}

/// Split prose into sentences on `. ` boundaries.
///
/// Good enough for bullet extraction; abbreviation handling is a non-goal.
fn split_sentences(text: &str) -> Vec<String> {
    text.split(". ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn ensure_terminator(mut sentence: String) -> String {
    if !sentence.ends_with('.') {
        sentence.push('.');
    }
    sentence
}

/// Clean the raw text a chat model returns into an ordered bullet list.
///
/// Models decorate bullet answers with `*`/`-` list markers, blank lines,
/// and an occasional "Here is the summary:" preamble despite being told
/// not to. This strips all three, drops fragments of 10 characters or
/// fewer, and guarantees a trailing period on every bullet — so a remote
/// backend can be wired up as `|text| Ok(bullets_from_model_output(&call_api(text)?))`.
pub fn bullets_from_model_output(raw: &str) -> Vec<String> {
    let cleaned = raw.replace(['*', '-'], "");
    let mut bullets: Vec<String> = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 10)
        .map(|line| ensure_terminator(line.to_string()))
        .collect();

    if let Some(first) = bullets.first() {
        let lower = first.to_lowercase();
        if lower.starts_with("here is") || lower.starts_with("here's") || lower.starts_with("here\u{2019}s") || lower.starts_with("here`s") {
            bullets.remove(0);
        }
    }
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through_whole() {
        let s = LeadSummarizer::default();
        let text = "A short abstract about nothing in particular.";
        assert_eq!(s.summarize(text).unwrap(), vec![text.to_string()]);
    }

    #[test]
    fn empty_text_yields_no_bullets() {
        let s = LeadSummarizer::default();
        assert!(s.summarize("   ").unwrap().is_empty());
    }

    #[test]
    fn long_text_takes_leading_sentences() {
        let sentence = "This sentence pads the section with enough words to cross the passthrough threshold";
        let text = format!("First point here. Second point here. {s}. {s}. {s}. {s}", s = sentence);
        let bullets = LeadSummarizer::new(2).summarize(&text).unwrap();
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[0], "First point here.");
        assert_eq!(bullets[1], "Second point here.");
    }

    #[test]
    fn bullets_end_with_period() {
        let sentence = "yet another filler clause to keep the word counter moving along nicely";
        let text = format!("{s}. {s}. {s}. {s}. {s}. {s}", s = sentence);
        for b in LeadSummarizer::default().summarize(&text).unwrap() {
            assert!(b.ends_with('.'), "bullet missing terminator: {b}");
        }
    }

    #[test]
    fn closure_backend_satisfies_trait() {
        let stub =
            |_: &str| -> Result<Vec<String>, SummarizeError> { Ok(vec!["One.".to_string()]) };
        assert_eq!(stub.summarize("anything").unwrap(), vec!["One."]);
    }

    #[test]
    fn model_output_markers_stripped() {
        let raw = "* The system improves recall by twelve percent\n- Latency stays flat under load\n";
        let bullets = bullets_from_model_output(raw);
        assert_eq!(bullets.len(), 2);
        assert!(bullets[0].starts_with("The system"));
        assert!(bullets.iter().all(|b| b.ends_with('.')));
    }

    #[test]
    fn model_output_preamble_dropped() {
        let raw = "Here is the summary you asked for:\nThe corpus covers forty languages\n";
        let bullets = bullets_from_model_output(raw);
        assert_eq!(bullets.len(), 1);
        assert!(bullets[0].starts_with("The corpus"));
    }

    #[test]
    fn model_output_short_fragments_dropped() {
        let raw = "ok\nSure thing\nA real finding about throughput scaling\n";
        let bullets = bullets_from_model_output(raw);
        assert_eq!(bullets.len(), 1);
    }
}
