//! One processing run: estimate pages, synthesize the title, derive the token, update statistics.
//!
//! The title request is the only suspension point; everything after it waits for its result.
//! At most one run is in flight per processor; a second call fails fast.

use page_core::{estimate_all, AuthenticationToken, Document, Estimate};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use crate::error::ProcessError;
use crate::ledger::{PersistentCounters, StatisticsLedger};
use crate::title::TitleSynthesizer;

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutcome {
    pub generated_title: String,
    pub estimate: Estimate,
    pub token: AuthenticationToken,
    /// Counters after this run was recorded.
    pub counters: PersistentCounters,
}

impl ProcessOutcome {
    pub fn total_pages(&self) -> usize {
        self.estimate.total_pages
    }

    pub fn reading_time_minutes(&self) -> u64 {
        self.token.reading_time_minutes()
    }
}

pub struct Processor {
    synthesizer: TitleSynthesizer,
    ledger: Mutex<StatisticsLedger>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the run ends, including when its future is dropped.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Processor {
    pub fn new(synthesizer: TitleSynthesizer, ledger: StatisticsLedger) -> Self {
        Self {
            synthesizer,
            ledger: Mutex::new(ledger),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn counters(&self) -> PersistentCounters {
        self.ledger.lock().await.counters().clone()
    }

    /// Runs the full pipeline over `documents`.
    ///
    /// On failure nothing is returned but the generic error; statistics are untouched unless the
    /// failure happened while persisting them.
    #[instrument(skip_all, fields(documents = documents.len()))]
    pub async fn process(&self, documents: &[Document]) -> Result<ProcessOutcome, ProcessError> {
        let _guard = RunGuard::acquire(&self.in_flight).ok_or(ProcessError::AlreadyRunning)?;

        self.run(documents).await.map_err(|e| {
            error!(error = %format!("{:#}", e), "Processing failed");
            ProcessError::Failed {
                cause: format!("{:#}", e),
            }
        })
    }

    async fn run(&self, documents: &[Document]) -> anyhow::Result<ProcessOutcome> {
        let estimate = estimate_all(documents);
        info!(
            total_chars = estimate.total_chars,
            total_pages = estimate.total_pages,
            "Estimated pages"
        );

        let generated_title = self.synthesizer.synthesize(documents).await?;

        let total_pages = estimate.total_pages as u64;
        let mut ledger = self.ledger.lock().await;
        let token = AuthenticationToken::new(
            ledger.counters().cumulative_days,
            generated_title.clone(),
            total_pages,
        );
        ledger.record_run(total_pages).await?;

        Ok(ProcessOutcome {
            generated_title,
            estimate,
            token,
            counters: ledger.counters().clone(),
        })
    }
}
