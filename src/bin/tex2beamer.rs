//! CLI binary for tex2beamer.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `DeckConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tex2beamer::{
    compile_pdf, convert_to_file, inspect, DeckConfig, DeckProgressCallback, LeadSummarizer,
    ProgressCallback,
};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: renders a live progress bar and per-section
/// log lines using [indicatif].
struct CliProgressCallback {
    bar: ProgressBar,
    errors: AtomicUsize,
}

impl CliProgressCallback {
    /// Create a callback whose progress-bar length is set dynamically by
    /// `on_conversion_start` (called once the document is split).
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_conversion_start

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(spinner_style);
        bar.set_prefix("Parsing");
        bar.set_message("Reading LaTeX project…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self {
            bar,
            errors: AtomicUsize::new(0),
        })
    }
}

impl DeckProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, total_sections: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>2}/{len} sections  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_sections as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Summarizing");
        self.bar.set_message("");
    }

    fn on_section_start(&self, _index: usize, _total: usize, title: &str) {
        self.bar.set_message(title.to_string());
    }

    fn on_section_complete(&self, index: usize, total: usize, bullet_count: usize) {
        self.bar.println(format!(
            "  {} Section {:>2}/{:<2}  {}",
            green("✓"),
            index,
            total,
            dim(&format!("{bullet_count} bullets")),
        ));
        self.bar.inc(1);
    }

    fn on_section_error(&self, index: usize, total: usize, error: &str) {
        self.errors.fetch_add(1, Ordering::SeqCst);
        let msg = if error.len() > 80 {
            format!("{}\u{2026}", &error[..79])
        } else {
            error.to_string()
        };
        self.bar.println(format!(
            "  {} Section {:>2}/{:<2}  {}",
            red("✗"),
            index,
            total,
            red(&msg),
        ));
        self.bar.inc(1);
    }

    fn on_conversion_complete(&self, total_sections: usize, success_count: usize) {
        let failed = total_sections.saturating_sub(success_count);
        self.bar.finish_and_clear();

        if failed == 0 {
            eprintln!(
                "{} {} sections summarized",
                green("✔"),
                bold(&success_count.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} sections summarized  ({} failed)",
                cyan("⚠"),
                bold(&success_count.to_string()),
                total_sections,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (writes main_beamer.tex next to the input)
  tex2beamer paper/main.tex

  # Convert to an explicit path with another theme
  tex2beamer paper/main.tex -o talk/deck.tex --theme Berlin

  # Inspect document structure, no deck generated
  tex2beamer --inspect-only paper/main.tex

  # Generate and compile straight to PDF (needs pdflatex on PATH)
  tex2beamer --compile paper/main.tex

  # JSON result for scripting
  tex2beamer --json paper/main.tex

SUMMARIZATION:
  The built-in summarizer is extractive (leading sentences per section)
  and fully offline. Model-backed backends plug in through the library
  API: any closure implementing the Summarizer trait can be used; see the
  crate documentation.
"#;

/// Convert a multi-file LaTeX article into a Beamer slide deck.
#[derive(Parser, Debug)]
#[command(
    name = "tex2beamer",
    version,
    about = "Convert multi-file LaTeX articles into Beamer slide decks",
    long_about = "Convert a LaTeX article (root file plus its \\input/\\include tree) into a \
Beamer deck: one bullet frame per section plus one frame per figure/table, with floats \
rewritten to fit slide geometry.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the root .tex file.
    input: PathBuf,

    /// Write the deck to this file. Default: "<input stem>_beamer.tex"
    /// next to the input.
    #[arg(short, long, env = "TEX2BEAMER_OUTPUT")]
    output: Option<PathBuf>,

    /// Beamer theme for \usetheme{...}.
    #[arg(long, env = "TEX2BEAMER_THEME", default_value = "Madrid")]
    theme: String,

    /// Maximum bullets per section frame.
    #[arg(short, long, env = "TEX2BEAMER_BULLETS", default_value_t = 5)]
    bullets: usize,

    /// Minimum pre-section text length (chars) for a synthetic context slide.
    #[arg(long, env = "TEX2BEAMER_CONTEXT_MIN", default_value_t = 50)]
    context_min_chars: usize,

    /// Maximum table height as a fraction of text height.
    #[arg(long, env = "TEX2BEAMER_TABLE_HEIGHT", default_value_t = 0.75)]
    table_max_height: f32,

    /// Print document structure only, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Compile the generated deck to PDF with pdflatex.
    #[arg(long, env = "TEX2BEAMER_COMPILE")]
    compile: bool,

    /// Keep pdflatex auxiliary files (.aux, .log, .nav, …) after compiling.
    #[arg(long, requires = "compile")]
    keep_aux: bool,

    /// Output structured JSON instead of human-readable text.
    #[arg(long, env = "TEX2BEAMER_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "TEX2BEAMER_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TEX2BEAMER_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "TEX2BEAMER_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json && !cli.inspect_only;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress || cli.json {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let config = build_config(&cli, None)?;
        let outline = inspect(&cli.input, &config).context("Failed to inspect document")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&outline).context("Failed to serialize outline")?
            );
        } else {
            println!("File:    {}", cli.input.display());
            println!("Title:   {}", outline.metadata.title);
            println!("Author:  {}", outline.metadata.author);
            println!("Sections ({}):", outline.sections.len());
            for s in &outline.sections {
                println!(
                    "  {:<30} {:>6} chars  {} figures  {} tables",
                    s.title, s.narrative_chars, s.figures, s.tables
                );
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new_dynamic() as Arc<dyn DeckProgressCallback>)
    } else {
        None
    };
    let config = build_config(&cli, progress_cb)?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    // ── Run conversion ───────────────────────────────────────────────────
    let summarizer = LeadSummarizer::new(cli.bullets);
    let written = convert_to_file(&cli.input, &output_path, &summarizer, &config)
        .context("Conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&written).context("Failed to serialise result")?
        );
    } else if !cli.quiet {
        eprintln!(
            "{}  {} sections  {} frames  {}ms  →  {}",
            if written.stats.failed_sections == 0 {
                green("✔")
            } else {
                cyan("⚠")
            },
            written.stats.sections,
            written.stats.frames,
            written.stats.total_duration_ms,
            bold(&written.path.display().to_string()),
        );
        eprintln!(
            "   {} figures  /  {} tables",
            dim(&written.stats.figures.to_string()),
            dim(&written.stats.tables.to_string()),
        );
    }

    // ── Optional PDF compilation ─────────────────────────────────────────
    if cli.compile {
        let pdf = compile_pdf(&written.path, cli.keep_aux).context("PDF compilation failed")?;
        if !cli.quiet && !cli.json {
            eprintln!("{}  {}", green("✔"), bold(&pdf.display().to_string()));
        }
    }

    Ok(())
}

/// Map CLI args to `DeckConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<DeckConfig> {
    let mut builder = DeckConfig::builder()
        .theme(cli.theme.clone())
        .context_min_chars(cli.context_min_chars)
        .table_max_height(cli.table_max_height);

    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

/// Derive the default output path: `<input stem>_beamer.tex` next to the
/// input file.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "presentation".to_string());
    input.with_file_name(format!("{stem}_beamer.tex"))
}
