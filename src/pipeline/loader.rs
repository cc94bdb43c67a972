//! Document loading: flatten a multi-file LaTeX project into one blob.
//!
//! ## Why flatten before extracting?
//!
//! Real articles spread their body over one file per section, spliced
//! together with `\input`/`\include`. Every extraction pattern downstream
//! assumes it sees the whole logical document, so inclusion is resolved
//! first, depth-first, each directive replaced in place by the referenced
//! file's (recursively resolved) content. Inclusion order is preserved
//! exactly.
//!
//! Resolution is relative to the directory of the file *containing* the
//! directive, not the root: `sections/intro.tex` saying `\input{fig}`
//! means `sections/fig.tex`.

use crate::config::DeckConfig;
use crate::error::Tex2BeamerError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static RE_INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(?:input|include)\{([^}]+)\}").unwrap());

/// Load `root` and recursively splice every `\input`/`\include` target.
///
/// References without an extension get [`DeckConfig::include_extension`]
/// appended. An unreadable referenced file aborts the entire load — no
/// partial document is ever returned.
///
/// Cyclic includes are not detected; a cycle recurses until the stack
/// overflows. LaTeX compilers reject such projects anyway, so the loader
/// does not pay for a visited-set on every well-formed document.
pub fn load_document(root: &Path, config: &DeckConfig) -> Result<String, Tex2BeamerError> {
    if !root.exists() {
        return Err(Tex2BeamerError::FileNotFound {
            path: root.to_path_buf(),
        });
    }
    let content = fs::read_to_string(root).map_err(|e| Tex2BeamerError::ReadFailed {
        path: root.to_path_buf(),
        source: e,
    })?;
    splice_includes(&content, root, config)
}

/// Replace each inclusion directive in `content` with the resolved content
/// of its target. `source_path` is the file `content` came from; targets
/// resolve against its parent directory.
fn splice_includes(
    content: &str,
    source_path: &Path,
    config: &DeckConfig,
) -> Result<String, Tex2BeamerError> {
    let base_dir = source_path.parent().unwrap_or_else(|| Path::new(""));
    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for caps in RE_INCLUDE.captures_iter(content) {
        let directive = caps.get(0).expect("match always has a full capture");
        out.push_str(&content[last..directive.start()]);

        let child_path = resolve_reference(base_dir, &caps[1], config);
        debug!("Including '{}'", child_path.display());

        let child_content =
            fs::read_to_string(&child_path).map_err(|e| Tex2BeamerError::IncludeUnreadable {
                path: child_path.clone(),
                referenced_from: source_path.to_path_buf(),
                source: e,
            })?;
        out.push_str(&splice_includes(&child_content, &child_path, config)?);

        last = directive.end();
    }

    out.push_str(&content[last..]);
    Ok(out)
}

fn resolve_reference(base_dir: &Path, reference: &str, config: &DeckConfig) -> PathBuf {
    let mut name = reference.to_string();
    if !name.ends_with(&config.include_extension) {
        name.push_str(&config.include_extension);
    }
    base_dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn single_file_passes_through() {
        let dir = tempfile::tempdir().unwrap();
        let root = write(dir.path(), "main.tex", "no includes here");
        let out = load_document(&root, &DeckConfig::default()).unwrap();
        assert_eq!(out, "no includes here");
    }

    #[test]
    fn nested_includes_flatten_depth_first() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "inner.tex", "INNER");
        write(dir.path(), "middle.tex", "M1 \\input{inner} M2");
        let root = write(dir.path(), "main.tex", "A \\input{middle} B");
        let out = load_document(&root, &DeckConfig::default()).unwrap();
        assert_eq!(out, "A M1 INNER M2 B");
    }

    #[test]
    fn extension_appended_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "part.tex", "PART");
        let root = write(dir.path(), "main.tex", "\\include{part}");
        assert_eq!(load_document(&root, &DeckConfig::default()).unwrap(), "PART");
    }

    #[test]
    fn explicit_extension_not_doubled() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "part.tex", "PART");
        let root = write(dir.path(), "main.tex", "\\input{part.tex}");
        assert_eq!(load_document(&root, &DeckConfig::default()).unwrap(), "PART");
    }

    #[test]
    fn references_resolve_against_including_file() {
        let dir = tempfile::tempdir().unwrap();
        // sections/intro.tex references "detail" — a sibling inside
        // sections/, not a file next to main.tex.
        write(dir.path(), "sections/detail.tex", "DETAIL");
        write(dir.path(), "sections/intro.tex", "intro \\input{detail}");
        let root = write(dir.path(), "main.tex", "\\input{sections/intro}");
        let out = load_document(&root, &DeckConfig::default()).unwrap();
        assert_eq!(out, "intro DETAIL");
    }

    #[test]
    fn multiple_includes_keep_document_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.tex", "[a]");
        write(dir.path(), "b.tex", "[b]");
        let root = write(dir.path(), "main.tex", "\\input{a} mid \\input{b}");
        let out = load_document(&root, &DeckConfig::default()).unwrap();
        assert_eq!(out, "[a] mid [b]");
    }

    #[test]
    fn unreadable_include_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = write(dir.path(), "main.tex", "A \\input{missing} B");
        let err = load_document(&root, &DeckConfig::default()).unwrap_err();
        match err {
            Tex2BeamerError::IncludeUnreadable {
                path,
                referenced_from,
                ..
            } => {
                assert!(path.ends_with("missing.tex"));
                assert!(referenced_from.ends_with("main.tex"));
            }
            other => panic!("expected IncludeUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn missing_root_reports_file_not_found() {
        let err = load_document(Path::new("/nonexistent/main.tex"), &DeckConfig::default())
            .unwrap_err();
        assert!(matches!(err, Tex2BeamerError::FileNotFound { .. }));
    }
}
