//! PDF compilation: drive `pdflatex` over a written deck.
//!
//! Strictly optional — the deck artifact is complete without it — but
//! saves the round trip through an editor when all you want is the PDF.
//! The compiler runs in batch mode with its output directory pinned next
//! to the artifact, and its droppings (`.aux`, `.log`, …) are removed
//! afterwards unless the caller asks to keep them.

use crate::error::Tex2BeamerError;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

/// Auxiliary file extensions pdflatex leaves behind.
const AUX_EXTENSIONS: [&str; 6] = ["aux", "log", "nav", "out", "snm", "toc"];

/// Compile `tex_path` to PDF with `pdflatex`, returning the PDF path.
///
/// # Errors
/// * [`Tex2BeamerError::CompilerNotFound`] — pdflatex could not be spawned
/// * [`Tex2BeamerError::CompileFailed`] — pdflatex exited non-zero
pub fn compile_pdf(tex_path: &Path, keep_aux: bool) -> Result<PathBuf, Tex2BeamerError> {
    let out_dir = tex_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    info!("Compiling {} with pdflatex", tex_path.display());
    let output = Command::new("pdflatex")
        .arg("-interaction=batchmode")
        .arg(format!("-output-directory={}", out_dir.display()))
        .arg(tex_path)
        .output()
        .map_err(|e| Tex2BeamerError::CompilerNotFound {
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Tex2BeamerError::CompileFailed {
            path: tex_path.to_path_buf(),
            status: output.status.code().unwrap_or(-1),
        });
    }

    if !keep_aux {
        for ext in AUX_EXTENSIONS {
            let aux = tex_path.with_extension(ext);
            // Absent droppings (a deck with no TOC, say) are not an error.
            if fs::remove_file(&aux).is_ok() {
                debug!("Removed {}", aux.display());
            }
        }
    }

    Ok(tex_path.with_extension("pdf"))
}
