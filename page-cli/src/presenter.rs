//! Text rendering for results, statistics and the document list. Pure string building.

use page_core::{Document, PAGE_CAPACITY};
use page_estimator::{PersistentCounters, ProcessOutcome, RunState};
use std::fmt::Write;

/// Formats an integer with `,` thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_stats(counters: &PersistentCounters) -> String {
    format!(
        "Cumulative statistics\n  Days:            {}\n  Sessions:        {}\n  Pages read:      {}\n",
        counters.cumulative_days,
        group_thousands(counters.total_sessions),
        group_thousands(counters.total_pages_read),
    )
}

pub fn render_documents(documents: &[Document]) -> String {
    let mut out = String::new();
    for (i, doc) in documents.iter().enumerate() {
        let title = if doc.has_blank_title() {
            "(no title)"
        } else {
            doc.title.as_str()
        };
        let _ = writeln!(
            out,
            "  [{}] {}  ({} chars)",
            i + 1,
            title,
            group_thousands(page_core::char_count(&doc.content) as u64)
        );
    }
    out
}

/// Renders a successful run: title, total, per-document lines, token.
pub fn render_outcome(outcome: &ProcessOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Generated title\n  \"{}\"", outcome.generated_title);
    let _ = writeln!(out, "Estimated total\n  {} pages", outcome.total_pages());
    let _ = writeln!(out, "Per document");
    for result in &outcome.estimate.results {
        let _ = writeln!(
            out,
            "  {}  {} chars / ~{} pages",
            result.original_title,
            group_thousands(result.char_count as u64),
            result.page_count
        );
    }
    let _ = writeln!(out, "Authentication token\n  {}", outcome.token);
    let _ = writeln!(
        out,
        "\nEstimate assumes {} characters per page (A4, 10pt, 160% line spacing); real formatting may differ.",
        PAGE_CAPACITY
    );
    out
}

/// Renders a successful run as pretty JSON; `token.text` holds the token string.
pub fn render_outcome_json(outcome: &ProcessOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

pub fn render_state(state: &RunState) -> String {
    match state {
        RunState::Idle => String::new(),
        RunState::Running => "Generating title...\n".to_string(),
        RunState::Succeeded(outcome) => render_outcome(outcome),
        RunState::Failed(e) => format!("{}\n", e),
    }
}
