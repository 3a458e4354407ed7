//! Tracing setup for `hwp-pages`: one fmt layer teed to stderr and an append-mode log file.
//!
//! stdout is left to results (rendered text or `--json`), so log lines never mix into it.

use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset. sqlx reports every statement at info.
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global subscriber. Fails if the log file cannot be opened or a subscriber is
/// already set.
///
/// Read `.env` before calling, or a `RUST_LOG` defined there is ignored.
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let log_file = log_file.as_ref();
    let file = open_log_file(log_file)
        .with_context(|| format!("Open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Instrumented pipeline steps report their duration when the span closes.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr.and(Arc::new(file)))
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_level(true);

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}

/// Opens `path` for appending, creating missing parent directories first.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
