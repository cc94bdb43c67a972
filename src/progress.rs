//! Progress-callback trait for per-section conversion events.
//!
//! Inject an [`Arc<dyn DeckProgressCallback>`] via
//! [`crate::config::DeckConfigBuilder::progress_callback`] to receive
//! events as the pipeline summarizes each section.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: callers
//! can forward events to a terminal progress bar, a log file, or a GUI
//! without the library knowing anything about how the host application
//! communicates. The trait is `Send + Sync` so a config holding one can be
//! shared across threads even though the pipeline itself is synchronous.

use std::sync::Arc;

/// Called by the conversion pipeline as it processes each section.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait DeckProgressCallback: Send + Sync {
    /// Fired once after splitting, with the number of sections that will be
    /// summarized.
    fn on_conversion_start(&self, total_sections: usize) {
        let _ = total_sections;
    }

    /// Fired before a section's summarizer call. `index` is 1-based.
    fn on_section_start(&self, index: usize, total: usize, title: &str) {
        let _ = (index, total, title);
    }

    /// Fired after a successful summarizer call.
    fn on_section_complete(&self, index: usize, total: usize, bullet_count: usize) {
        let _ = (index, total, bullet_count);
    }

    /// Fired when a section's summarizer call failed (non-fatal).
    fn on_section_error(&self, index: usize, total: usize, error: &str) {
        let _ = (index, total, error);
    }

    /// Fired once after assembly, with the number of sections that
    /// summarized successfully.
    fn on_conversion_complete(&self, total_sections: usize, success_count: usize) {
        let _ = (total_sections, success_count);
    }
}

/// Shared handle to a progress callback.
pub type ProgressCallback = Arc<dyn DeckProgressCallback>;
