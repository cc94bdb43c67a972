//! # tex2beamer
//!
//! Convert multi-file LaTeX articles into Beamer slide decks.
//!
//! ## Why this crate?
//!
//! Turning a paper into a talk is mechanical drudgery: the same sections,
//! the same figures and tables, retyped into frames. This crate automates
//! the mechanical part — it flattens the article's `\input`/`\include`
//! tree, splits the body into sections, lifts figure and table floats out
//! of the prose, and re-emits everything as Beamer frames. The one
//! genuinely hard step, compressing narrative into bullets, is delegated
//! to a pluggable [`Summarizer`] so any backend (local model, remote API,
//! plain heuristic) slots in.
//!
//! Extraction is pattern-based by design: ordered match-and-strip passes
//! over immutable text, not a validating LaTeX parser. Structural
//! fidelity is the contract, full language coverage is not.
//!
//! ## Pipeline Overview
//!
//! ```text
//! main.tex
//!  │
//!  ├─ 1. Load       flatten the include tree, depth-first
//!  ├─ 2. Preprocess strip comments, collapse whitespace
//!  ├─ 3. Extract    title/author metadata, sections, figure/table floats
//!  ├─ 4. Summarize  narrative → bullets via the injected capability
//!  ├─ 5. Compose    bullet frame + one frame per sanitized float
//!  └─ 6. Assemble   preamble + frames + closing marker → deck.tex
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tex2beamer::{convert_to_file, DeckConfig, LeadSummarizer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeckConfig::default();
//!     let summarizer = LeadSummarizer::default();
//!     let written = convert_to_file("paper/main.tex", "deck.tex", &summarizer, &config)?;
//!     eprintln!("{} frames -> {}", written.stats.frames, written.path.display());
//!     Ok(())
//! }
//! ```
//!
//! Any closure is a summarizer too, which is the natural seam for wiring
//! in a model API:
//!
//! ```rust,no_run
//! use tex2beamer::summarize::{bullets_from_model_output, SummarizeError};
//!
//! # fn call_model(prompt: &str) -> Result<String, SummarizeError> { Ok(String::new()) }
//! let remote = |text: &str| -> Result<Vec<String>, SummarizeError> {
//!     let raw = call_model(&tex2beamer::prompts::summary_prompt(text, 5))?;
//!     Ok(bullets_from_model_output(&raw))
//! };
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `tex2beamer` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! tex2beamer = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod compile;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod summarize;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use compile::compile_pdf;
pub use config::{DeckConfig, DeckConfigBuilder};
pub use convert::{convert, convert_to_file, inspect};
pub use document::{Asset, AssetKind, DocumentMetadata, Section};
pub use error::{SectionError, Tex2BeamerError};
pub use output::{DeckOutline, DeckOutput, DeckStats, SectionOutline, SectionResult, WrittenDeck};
pub use progress::{DeckProgressCallback, ProgressCallback};
pub use summarize::{LeadSummarizer, SummarizeError, Summarizer};
