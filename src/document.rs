//! Document-model records produced by the ingestion stages.
//!
//! Every type here is a plain immutable value: a stage produces it, the
//! next stage consumes it, and nothing holds a reference back into an
//! earlier stage's input. That keeps repeated pipeline runs free of
//! aliasing hazards without any synchronisation.

use serde::{Deserialize, Serialize};

/// Bibliographic metadata pulled from the flattened document.
///
/// Produced once per document by [`crate::pipeline::metadata`]; missing
/// directives fall back to the defaults rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
}

impl DocumentMetadata {
    /// Title used when the document carries no `\title` directive.
    pub const DEFAULT_TITLE: &'static str = "Untitled Presentation";
    /// Author used when the document carries no `\author` directive.
    pub const DEFAULT_AUTHOR: &'static str = "Unknown Author";
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE.to_string(),
            author: Self::DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// Which float environment an [`Asset`] was captured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    Figure,
    Table,
}

impl AssetKind {
    /// Label used in asset frame titles ("Figure 1", "Table 2").
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Figure => "Figure",
            AssetKind::Table => "Table",
        }
    }
}

/// One figure or table environment, captured verbatim.
///
/// `raw_source` is the unmodified span from the source document; slide
/// sizing rewrites happen later in [`crate::pipeline::sanitize`] and never
/// mutate the stored original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub kind: AssetKind,
    pub raw_source: String,
}

impl Asset {
    pub fn new(kind: AssetKind, raw_source: impl Into<String>) -> Self {
        Self {
            kind,
            raw_source: raw_source.into(),
        }
    }
}

/// One topical section of the document body.
///
/// `narrative` is guaranteed asset-free: every float span was moved into
/// `assets` by [`crate::pipeline::assets::extract_assets`]. Asset order is
/// extraction-pass order — all figures first, then all tables — not the
/// original interleaving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub narrative: String,
    pub assets: Vec<Asset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_defaults() {
        let m = DocumentMetadata::default();
        assert_eq!(m.title, "Untitled Presentation");
        assert_eq!(m.author, "Unknown Author");
    }

    #[test]
    fn asset_kind_labels() {
        assert_eq!(AssetKind::Figure.label(), "Figure");
        assert_eq!(AssetKind::Table.label(), "Table");
    }
}
