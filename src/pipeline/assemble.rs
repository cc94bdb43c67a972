//! Presentation assembly: preamble + frames + closing marker.
//!
//! The preamble is parameterized by theme and metadata and already
//! contains the title page, so even a deck with zero composed frames is a
//! valid, compilable document. Assembly is pure; writing the artifact is
//! the separate, side-effecting [`write_deck`].

use crate::config::DeckConfig;
use crate::document::DocumentMetadata;
use crate::error::Tex2BeamerError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Build the Beamer preamble for this deck.
///
/// The package set covers everything the sanitiser and composer can emit:
/// graphicx for `\includegraphics`, booktabs/multirow for article-grade
/// tables, tikz for inline diagrams carried over verbatim, and adjustbox
/// for the table scaling wrapper.
fn preamble(metadata: &DocumentMetadata, config: &DeckConfig) -> String {
    format!(
        r"\documentclass{{beamer}}
\usepackage[utf8]{{inputenc}}
\usepackage[T1]{{fontenc}}
\usepackage{{graphicx,url}}
\usepackage{{amsmath}}
\usepackage{{booktabs}}
\usepackage{{multirow}}
\usepackage{{tikz}}
\usetikzlibrary{{arrows.meta, positioning, shapes.geometric}}
\usepackage{{adjustbox}}
\usetheme{{{theme}}}

% Number figure and table captions
\setbeamertemplate{{caption}}[numbered]
% Drop the default navigation icons
\setbeamertemplate{{navigation symbols}}{{}}

\title{{{title}}}
\author{{{author}}}
\date{{\today}}

\begin{{document}}

\frame{{\titlepage}}

",
        theme = config.theme,
        title = metadata.title,
        author = metadata.author,
    )
}

/// Concatenate the preamble, every composed slide block in input order,
/// and the closing marker into the final deck source.
pub fn assemble_deck(
    slide_blocks: &[String],
    metadata: &DocumentMetadata,
    config: &DeckConfig,
) -> String {
    let mut deck = preamble(metadata, config);
    for block in slide_blocks {
        deck.push_str(block);
    }
    deck.push_str("\\end{document}\n");
    deck
}

/// Write the assembled deck to `path`, creating parent directories as
/// needed, and return the artifact's absolute path.
///
/// Creates or overwrites exactly one file.
pub fn write_deck(beamer: &str, path: &Path) -> Result<PathBuf, Tex2BeamerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Tex2BeamerError::OutputWriteFailed {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(path, beamer).map_err(|e| Tex2BeamerError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let resolved = std::path::absolute(path).map_err(|e| Tex2BeamerError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Wrote deck to {}", resolved.display());
    Ok(resolved)
}
