//! Document input from command-line specs: `[TITLE=]PATH`, with `-` for stdin.

use anyhow::{Context, Result};
use page_core::Document;
use std::io::Read;
use std::path::PathBuf;

/// Where a document's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub title: String,
    pub source: ContentSource,
}

/// Parses `TITLE=PATH` (split on the first `=`) or a bare `PATH` (empty title).
pub fn parse_document_spec(raw: &str) -> Result<DocumentSpec, String> {
    let (title, path) = match raw.split_once('=') {
        Some((title, path)) => (title.to_string(), path),
        None => (String::new(), raw),
    };
    if path.is_empty() {
        return Err(format!("missing path in document spec: {raw:?}"));
    }
    let source = if path == "-" {
        ContentSource::Stdin
    } else {
        ContentSource::File(PathBuf::from(path))
    };
    Ok(DocumentSpec { title, source })
}

/// Reads every spec into a [`Document`], in order. Stdin may be used at most once.
pub fn load_documents(specs: &[DocumentSpec]) -> Result<Vec<Document>> {
    let stdin_uses = specs
        .iter()
        .filter(|s| s.source == ContentSource::Stdin)
        .count();
    if stdin_uses > 1 {
        anyhow::bail!("stdin (-) can be used for at most one document");
    }

    specs
        .iter()
        .map(|spec| {
            let content = match &spec.source {
                ContentSource::Stdin => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read document from stdin")?;
                    buf
                }
                ContentSource::File(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            };
            Ok(Document::new(spec.title.clone(), content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_path_has_empty_title() {
        let spec = parse_document_spec("notes.txt").unwrap();
        assert_eq!(spec.title, "");
        assert_eq!(spec.source, ContentSource::File(PathBuf::from("notes.txt")));
    }

    #[test]
    fn splits_on_first_equals() {
        let spec = parse_document_spec("A=B=c.txt").unwrap();
        assert_eq!(spec.title, "A");
        assert_eq!(spec.source, ContentSource::File(PathBuf::from("B=c.txt")));
    }

    #[test]
    fn dash_is_stdin() {
        let spec = parse_document_spec("보고서=-").unwrap();
        assert_eq!(spec.title, "보고서");
        assert_eq!(spec.source, ContentSource::Stdin);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(parse_document_spec("Title=").is_err());
        assert!(parse_document_spec("").is_err());
    }

    #[test]
    fn stdin_twice_is_rejected() {
        let specs = vec![
            parse_document_spec("-").unwrap(),
            parse_document_spec("x=-").unwrap(),
        ];
        assert!(load_documents(&specs).is_err());
    }
}
