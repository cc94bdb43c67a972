//! Prompt text for model-backed summarizer backends.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — tweaking the instructions (bullet count,
//!    tone, length budget) means editing exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the prompt directly without
//!    calling a model.
//!
//! The core never sends this anywhere itself; it is a convenience for
//! callers wiring a chat model into the [`crate::summarize::Summarizer`]
//! capability. Pair it with
//! [`crate::summarize::bullets_from_model_output`] on the response.

/// Instruction block for bullet-point summarization of one section.
///
/// The section text is appended by [`summary_prompt`]; `{max_bullets}` is
/// substituted there.
pub const DEFAULT_SUMMARY_PROMPT: &str = r#"You are an expert at building presentation slides. Summarize the following text in at most {max_bullets} concise, informative bullet points.

The text is an excerpt from an academic article or technical document. Extract only the most crucial information.

Each bullet point must be a complete sentence ending with a period.

Return only the bullet points, one per line, with no introduction and no commentary."#;

/// Build the complete prompt for one section's narrative.
pub fn summary_prompt(text: &str, max_bullets: usize) -> String {
    format!(
        "{}\n\nText to summarize:\n---\n{}\n---",
        DEFAULT_SUMMARY_PROMPT.replace("{max_bullets}", &max_bullets.to_string()),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_text_and_bullet_budget() {
        let p = summary_prompt("Our method halves the error rate.", 5);
        assert!(p.contains("at most 5 concise"));
        assert!(p.contains("Our method halves the error rate."));
        assert!(!p.contains("{max_bullets}"));
    }
}
