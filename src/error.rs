//! Error types for the tex2beamer library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Tex2BeamerError`] — **Fatal**: the conversion cannot proceed at all
//!   (root document or an included file unreadable, output not writable,
//!   invalid configuration). Returned as `Err(Tex2BeamerError)` from the
//!   top-level `convert*` functions.
//!
//! * [`SectionError`] — **Non-fatal**: the summarizer failed for a single
//!   section but every other section is fine. Stored inside
//!   [`crate::output::SectionResult`] so callers can inspect partial success
//!   rather than losing the whole deck to one bad section.
//!
//! Structural absences are not errors at all: a document without a
//! `\begin{document}` body yields an empty section list, and missing
//! `\title`/`\author` directives fall back to default metadata.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the tex2beamer library.
///
/// Per-section summarizer failures use [`SectionError`] and are stored in
/// [`crate::output::SectionResult`] rather than propagated here.
#[derive(Debug, Error)]
pub enum Tex2BeamerError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The root document was not found at the given path.
    #[error("LaTeX file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// A file referenced by an `\input`/`\include` directive could not be
    /// read. The whole load aborts; no partial document is produced.
    #[error("Failed to read included file '{path}' (referenced from '{referenced_from}'): {source}")]
    IncludeUnreadable {
        path: PathBuf,
        referenced_from: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The root document exists but reading it failed.
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output `.tex` file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Compiler errors ───────────────────────────────────────────────────
    /// `pdflatex` could not be spawned (not installed / not on PATH).
    #[error("Failed to run pdflatex: {detail}\nInstall a TeX distribution (TeX Live, MiKTeX) and ensure pdflatex is on PATH.")]
    CompilerNotFound { detail: String },

    /// `pdflatex` ran but exited with a failure status.
    #[error("pdflatex failed on '{path}' (exit status {status})\nInspect the .log file next to the output for details.")]
    CompileFailed { path: PathBuf, status: i32 },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A non-fatal error for a single section.
///
/// Stored alongside [`crate::output::SectionResult`] when summarization
/// fails. The section still contributes its figure/table frames; only the
/// bullet frame is lost.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum SectionError {
    /// The injected summarizer returned an error for this section.
    #[error("Section '{title}': summarization failed: {detail}")]
    SummarizeFailed { title: String, detail: String },
}
