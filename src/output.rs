//! Output types returned by the conversion entry points.

use crate::document::{Asset, DocumentMetadata};
use crate::error::SectionError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The outcome of joining one [`crate::document::Section`] with the
/// summarizer's bullet list.
///
/// `error` is `Some` when the summarizer failed for this section; the
/// section then contributes only its asset frames to the deck. Immutable
/// once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionResult {
    /// Section title as captured from the document (unescaped).
    pub title: String,
    /// Ordered bullet sentences supplied by the summarizer.
    pub bullets: Vec<String>,
    /// Assets carried over from the section, extraction-pass order.
    pub assets: Vec<Asset>,
    /// Wall-clock time spent in the summarizer for this section.
    pub duration_ms: u64,
    /// Set when summarization failed; the deck still includes the
    /// section's asset frames.
    pub error: Option<SectionError>,
}

/// Counters and timings for one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckStats {
    /// Sections that survived splitting and filtering.
    pub sections: usize,
    /// Sections whose summarizer call failed.
    pub failed_sections: usize,
    /// Figure assets across all sections.
    pub figures: usize,
    /// Table assets across all sections.
    pub tables: usize,
    /// `\begin{frame}` environments emitted (bullet frames + asset frames).
    pub frames: usize,
    /// Total wall-clock time for the conversion.
    pub total_duration_ms: u64,
    /// Wall-clock time spent inside the summarizer.
    pub summarize_duration_ms: u64,
}

/// Complete result of a conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckOutput {
    /// The assembled Beamer source (preamble + frames + closing marker).
    pub beamer: String,
    /// Metadata used to parameterize the preamble.
    pub metadata: DocumentMetadata,
    /// Per-section results in document order.
    pub sections: Vec<SectionResult>,
    /// Counters and timings.
    pub stats: DeckStats,
}

/// Structural summary of a document, produced by [`crate::convert::inspect`]
/// without invoking the summarizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckOutline {
    pub metadata: DocumentMetadata,
    pub sections: Vec<SectionOutline>,
}

/// One section's entry in a [`DeckOutline`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOutline {
    pub title: String,
    /// Length of the asset-free narrative, in characters.
    pub narrative_chars: usize,
    pub figures: usize,
    pub tables: usize,
}

/// Result of [`crate::convert::convert_to_file`]: where the artifact landed
/// plus the run's bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenDeck {
    /// Absolute path of the written `.tex` artifact.
    pub path: PathBuf,
    pub stats: DeckStats,
}
