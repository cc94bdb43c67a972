//! Configuration types for LaTeX-to-Beamer conversion.
//!
//! All conversion behaviour is controlled through [`DeckConfig`], built via
//! its [`DeckConfigBuilder`]. Keeping every knob in one struct keeps
//! concurrent pipeline runs with different settings isolated from each
//! other — there are no module-level mutable defaults anywhere in the crate.
//!
//! # Design choice: builder over constructor
//! A many-field constructor is unreadable and breaks on every new field.
//! The builder lets callers set only what they care about and rely on
//! well-documented defaults for the rest.

use crate::error::Tex2BeamerError;
use crate::progress::ProgressCallback;
use std::fmt;

/// Configuration for a LaTeX-to-Beamer conversion.
///
/// Built via [`DeckConfig::builder()`] or using [`DeckConfig::default()`].
///
/// # Example
/// ```rust
/// use tex2beamer::DeckConfig;
///
/// let config = DeckConfig::builder()
///     .theme("Berlin")
///     .context_min_chars(80)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DeckConfig {
    /// Beamer theme name emitted as `\usetheme{...}`. Default: "Madrid".
    pub theme: String,

    /// Minimum length (characters, after whitespace normalization) the text
    /// before the first `\section` must exceed to become a synthetic
    /// context section. Default: 50.
    ///
    /// Articles usually open with an abstract or a short preface before the
    /// first numbered section. Anything at or below the threshold is
    /// leftover preamble noise (a stray `\maketitle`, spacing commands) and
    /// is dropped rather than summarized into a near-empty slide.
    pub context_min_chars: usize,

    /// Title used for the synthetic pre-header section. Default: "Context".
    pub context_title: String,

    /// Lowercase substrings that mark a section as bibliographic. A section
    /// whose lowercased title contains any of these never reaches the
    /// output. Default: `["biblio", "reference"]`.
    pub bibliography_markers: Vec<String>,

    /// Extension appended to `\input`/`\include` references that carry
    /// none. Default: ".tex".
    pub include_extension: String,

    /// Maximum table height as a fraction of `\textheight`, used for the
    /// adjustbox wrapper around `tabular` blocks. Range: (0, 1].
    /// Default: 0.75.
    ///
    /// Full-height tables collide with the frame title; 0.75 leaves room
    /// for the title and the caption on a standard 4:3 frame.
    pub table_max_height: f32,

    /// Per-section progress events. Default: None.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            theme: "Madrid".to_string(),
            context_min_chars: 50,
            context_title: "Context".to_string(),
            bibliography_markers: vec!["biblio".to_string(), "reference".to_string()],
            include_extension: ".tex".to_string(),
            table_max_height: 0.75,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for DeckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckConfig")
            .field("theme", &self.theme)
            .field("context_min_chars", &self.context_min_chars)
            .field("context_title", &self.context_title)
            .field("bibliography_markers", &self.bibliography_markers)
            .field("include_extension", &self.include_extension)
            .field("table_max_height", &self.table_max_height)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn DeckProgressCallback>"),
            )
            .finish()
    }
}

impl DeckConfig {
    /// Create a new builder for `DeckConfig`.
    pub fn builder() -> DeckConfigBuilder {
        DeckConfigBuilder {
            config: Self::default(),
        }
    }

    /// True when `title` names a bibliography/reference section.
    ///
    /// Case-insensitive substring match against
    /// [`DeckConfig::bibliography_markers`].
    pub fn is_bibliography_title(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.bibliography_markers.iter().any(|m| lower.contains(m))
    }
}

/// Builder for [`DeckConfig`].
#[derive(Debug)]
pub struct DeckConfigBuilder {
    config: DeckConfig,
}

impl DeckConfigBuilder {
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.theme = theme.into();
        self
    }

    pub fn context_min_chars(mut self, n: usize) -> Self {
        self.config.context_min_chars = n;
        self
    }

    pub fn context_title(mut self, title: impl Into<String>) -> Self {
        self.config.context_title = title.into();
        self
    }

    /// Replace the bibliography markers. Markers are matched lowercase.
    pub fn bibliography_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.bibliography_markers =
            markers.into_iter().map(|m| m.into().to_lowercase()).collect();
        self
    }

    pub fn include_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.include_extension = ext.into();
        self
    }

    pub fn table_max_height(mut self, frac: f32) -> Self {
        self.config.table_max_height = frac;
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<DeckConfig, Tex2BeamerError> {
        let c = &self.config;
        if c.theme.trim().is_empty() {
            return Err(Tex2BeamerError::InvalidConfig(
                "theme must not be empty".into(),
            ));
        }
        if !(c.table_max_height > 0.0 && c.table_max_height <= 1.0) {
            return Err(Tex2BeamerError::InvalidConfig(format!(
                "table_max_height must be in (0, 1], got {}",
                c.table_max_height
            )));
        }
        if c.include_extension.is_empty() {
            return Err(Tex2BeamerError::InvalidConfig(
                "include_extension must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DeckConfig::default();
        assert_eq!(c.theme, "Madrid");
        assert_eq!(c.context_min_chars, 50);
        assert_eq!(c.include_extension, ".tex");
        assert!((c.table_max_height - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn builder_overrides() {
        let c = DeckConfig::builder()
            .theme("Berlin")
            .context_min_chars(80)
            .bibliography_markers(["Bibliography", "acknowledg"])
            .build()
            .unwrap();
        assert_eq!(c.theme, "Berlin");
        assert_eq!(c.context_min_chars, 80);
        assert!(c.is_bibliography_title("Acknowledgements"));
    }

    #[test]
    fn rejects_bad_table_height() {
        assert!(DeckConfig::builder().table_max_height(0.0).build().is_err());
        assert!(DeckConfig::builder().table_max_height(1.5).build().is_err());
        assert!(DeckConfig::builder().table_max_height(1.0).build().is_ok());
    }

    #[test]
    fn rejects_empty_theme() {
        assert!(DeckConfig::builder().theme("  ").build().is_err());
    }

    #[test]
    fn bibliography_title_match_is_case_insensitive() {
        let c = DeckConfig::default();
        assert!(c.is_bibliography_title("References"));
        assert!(c.is_bibliography_title("Annotated BIBLIOGRAPHY"));
        assert!(!c.is_bibliography_title("Related Work"));
    }
}
