//! Pipeline stages for LaTeX-to-Beamer conversion.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. support another float environment) without
//! touching other stages.
//!
//! ## Data Flow
//!
//! ```text
//! loader ──▶ preprocess ──▶ metadata ─┐
//!  (flatten)  (comments,    (title/   ├─▶ compose ──▶ assemble
//!             whitespace)    author)   │   (frames)    (preamble + closing)
//!                     └─▶ sections ───┘
//!                          (split, assets)
//! ```
//!
//! 1. [`loader`]     — flatten the `\input`/`\include` tree into one blob
//! 2. [`preprocess`] — strip comments, collapse whitespace; every later
//!    pattern assumes the resulting single-line text stream
//! 3. [`commands`]   — remove formatting wrappers from captured fragments
//! 4. [`metadata`]   — first `\title`/`\author` match, with defaults
//! 5. [`sections`]   — locate the document body, split on `\section`
//! 6. [`assets`]     — pull figure/table floats out of section text
//! 7. [`sanitize`]   — rewrite float source for slide-sized rendering
//! 8. [`compose`]    — emit the frames for one section
//! 9. [`assemble`]   — preamble + frames + closing marker, file write
//!
//! The extraction stages are ordered, composable match-and-strip passes
//! over immutable text — deliberately not a validating LaTeX parser.
//! Structural fidelity, not language coverage, is the contract.

pub mod assemble;
pub mod assets;
pub mod commands;
pub mod compose;
pub mod loader;
pub mod metadata;
pub mod preprocess;
pub mod sanitize;
pub mod sections;
