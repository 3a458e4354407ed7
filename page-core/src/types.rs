//! Core types: document, document id, per-document calculation result.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, unique document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-entered document. Title and content may both be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
}

impl Document {
    /// A new blank document with a fresh id.
    pub fn blank() -> Self {
        Self::new("", "")
    }

    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// True when the title is empty or whitespace only.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Per-document estimate. Derived on every run, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Document title, or the untitled placeholder when blank.
    pub original_title: String,
    pub char_count: usize,
    pub page_count: usize,
}
