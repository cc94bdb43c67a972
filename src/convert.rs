//! Eager (full-document) conversion entry points.
//!
//! The pipeline is fully synchronous: nothing here suspends or blocks on
//! the network. The summarizer is the only long-latency step and is an
//! opaque call behind the injected [`Summarizer`] capability, so callers
//! decide whether that cost means a local model or a remote API.

use crate::config::DeckConfig;
use crate::document::{AssetKind, Section};
use crate::error::{SectionError, Tex2BeamerError};
use crate::output::{
    DeckOutline, DeckOutput, DeckStats, SectionOutline, SectionResult, WrittenDeck,
};
use crate::pipeline::{assemble, compose, loader, metadata, preprocess, sections};
use crate::summarize::Summarizer;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert a LaTeX project into Beamer deck source.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `input` — path to the root `.tex` file; `\input`/`\include` targets
///   resolve relative to each including file
/// * `summarizer` — backend that turns section narrative into bullets
/// * `config` — conversion configuration
///
/// # Returns
/// `Ok(DeckOutput)` on success, even if some sections failed to
/// summarize (check `output.stats.failed_sections`).
///
/// # Errors
/// Returns `Err(Tex2BeamerError)` only for fatal errors: the root
/// document or an included file is unreadable, or the configuration is
/// invalid. A document without a body is not an error — it produces a
/// preamble-only deck.
pub fn convert<S>(
    input: impl AsRef<Path>,
    summarizer: &S,
    config: &DeckConfig,
) -> Result<DeckOutput, Tex2BeamerError>
where
    S: Summarizer + ?Sized,
{
    let total_start = Instant::now();
    let input = input.as_ref();
    info!("Starting conversion: {}", input.display());

    // ── Step 1: Flatten the include tree ─────────────────────────────────
    let raw = loader::load_document(input, config)?;
    debug!("Flattened document: {} bytes", raw.len());

    // ── Step 2: Preprocess ───────────────────────────────────────────────
    let clean = preprocess::preprocess(&raw);

    // ── Step 3: Extract metadata ─────────────────────────────────────────
    let meta = metadata::extract_metadata(&clean);
    info!("Title: {}", meta.title);

    // ── Step 4: Split into sections ──────────────────────────────────────
    let doc_sections = sections::split_sections(&clean, config);
    info!("Found {} sections", doc_sections.len());

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(doc_sections.len());
    }

    // ── Step 5: Summarize each section ───────────────────────────────────
    let summarize_start = Instant::now();
    let total = doc_sections.len();
    let mut results: Vec<SectionResult> = Vec::with_capacity(total);

    for (i, section) in doc_sections.into_iter().enumerate() {
        let index = i + 1;
        if let Some(ref cb) = config.progress_callback {
            cb.on_section_start(index, total, &section.title);
        }
        debug!("Summarizing [{}/{}]: {}", index, total, section.title);

        let result = summarize_section(summarizer, section);

        if let Some(ref cb) = config.progress_callback {
            match &result.error {
                None => cb.on_section_complete(index, total, result.bullets.len()),
                Some(e) => cb.on_section_error(index, total, &e.to_string()),
            }
        }
        results.push(result);
    }
    let summarize_duration_ms = summarize_start.elapsed().as_millis() as u64;

    // ── Step 6: Compose frames and assemble the deck ─────────────────────
    let blocks: Vec<String> = results
        .iter()
        .map(|r| compose::compose_section(&r.title, &r.bullets, &r.assets, config))
        .collect();
    let beamer = assemble::assemble_deck(&blocks, &meta, config);

    // ── Step 7: Compute stats ────────────────────────────────────────────
    let failed = results.iter().filter(|r| r.error.is_some()).count();
    let stats = DeckStats {
        sections: results.len(),
        failed_sections: failed,
        figures: count_assets(&results, AssetKind::Figure),
        tables: count_assets(&results, AssetKind::Table),
        frames: results
            .iter()
            .map(|r| usize::from(!r.bullets.is_empty()) + r.assets.len())
            .sum(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        summarize_duration_ms,
    };

    info!(
        "Conversion complete: {} sections, {} frames, {}ms total",
        stats.sections, stats.frames, stats.total_duration_ms
    );

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(total, total - failed);
    }

    Ok(DeckOutput {
        beamer,
        metadata: meta,
        sections: results,
        stats,
    })
}

/// Convert a LaTeX project and write the deck to `output_path`.
///
/// Returns the artifact's absolute path together with the run's stats.
pub fn convert_to_file<S>(
    input: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    summarizer: &S,
    config: &DeckConfig,
) -> Result<WrittenDeck, Tex2BeamerError>
where
    S: Summarizer + ?Sized,
{
    let output = convert(input, summarizer, config)?;
    let path = assemble::write_deck(&output.beamer, output_path.as_ref())?;
    Ok(WrittenDeck {
        path,
        stats: output.stats,
    })
}

/// Extract document structure without invoking the summarizer.
///
/// Useful for previewing what a conversion would cover — no model, no
/// API key, no bullet generation.
pub fn inspect(
    input: impl AsRef<Path>,
    config: &DeckConfig,
) -> Result<DeckOutline, Tex2BeamerError> {
    let raw = loader::load_document(input.as_ref(), config)?;
    let clean = preprocess::preprocess(&raw);
    let meta = metadata::extract_metadata(&clean);
    let outline = sections::split_sections(&clean, config)
        .into_iter()
        .map(|s| SectionOutline {
            narrative_chars: s.narrative.len(),
            figures: s
                .assets
                .iter()
                .filter(|a| a.kind == AssetKind::Figure)
                .count(),
            tables: s
                .assets
                .iter()
                .filter(|a| a.kind == AssetKind::Table)
                .count(),
            title: s.title,
        })
        .collect();

    Ok(DeckOutline {
        metadata: meta,
        sections: outline,
    })
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Run the summarizer for one section.
///
/// Always returns a `SectionResult` — a backend failure is recorded in
/// `result.error` instead of propagating, so one bad section doesn't
/// abort the deck. The section's assets survive either way.
fn summarize_section<S>(summarizer: &S, section: Section) -> SectionResult
where
    S: Summarizer + ?Sized,
{
    let start = Instant::now();
    let Section {
        title,
        narrative,
        assets,
    } = section;

    match summarizer.summarize(&narrative) {
        Ok(bullets) => SectionResult {
            title,
            bullets,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            error: None,
        },
        Err(e) => {
            warn!("Section '{}': summarizer failed — {}", title, e);
            let error = SectionError::SummarizeFailed {
                title: title.clone(),
                detail: e.to_string(),
            };
            SectionResult {
                title,
                bullets: Vec::new(),
                assets,
                duration_ms: start.elapsed().as_millis() as u64,
                error: Some(error),
            }
        }
    }
}

fn count_assets(results: &[SectionResult], kind: AssetKind) -> usize {
    results
        .iter()
        .flat_map(|r| r.assets.iter())
        .filter(|a| a.kind == kind)
        .count()
}
