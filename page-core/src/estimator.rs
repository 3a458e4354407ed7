//! Page estimation: content length to printed page count.
//!
//! One page holds [`PAGE_CAPACITY`] characters (A4, 10pt body font, 160% line spacing;
//! tuned against real documents). The aggregate total is one ceiling over the summed
//! length, not the sum of per-document ceilings, so the two can disagree.

use serde::{Deserialize, Serialize};

use crate::types::{CalculationResult, Document};

/// Characters (spaces included) per printed page.
pub const PAGE_CAPACITY: usize = 1920;

/// Label reported for documents whose title is blank.
pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

/// Number of characters in `content`, counted as Unicode scalar values.
pub fn char_count(content: &str) -> usize {
    content.chars().count()
}

/// `ceil(chars / PAGE_CAPACITY)`; zero characters is zero pages.
pub fn page_count(chars: usize) -> usize {
    chars.div_ceil(PAGE_CAPACITY)
}

pub fn estimate_document(doc: &Document) -> CalculationResult {
    let chars = char_count(&doc.content);
    let original_title = if doc.has_blank_title() {
        UNTITLED_DOCUMENT.to_string()
    } else {
        doc.title.clone()
    };
    CalculationResult {
        original_title,
        char_count: chars,
        page_count: page_count(chars),
    }
}

/// Per-document results plus the aggregate totals for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub results: Vec<CalculationResult>,
    pub total_chars: usize,
    pub total_pages: usize,
}

pub fn estimate_all(documents: &[Document]) -> Estimate {
    let results: Vec<CalculationResult> = documents.iter().map(estimate_document).collect();
    let total_chars = results.iter().map(|r| r.char_count).sum();
    Estimate {
        results,
        total_chars,
        total_pages: page_count(total_chars),
    }
}
