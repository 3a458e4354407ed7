//! Statistics ledger: cumulative days, sessions and pages read, persisted in a [`KeyValueStore`].
//!
//! Two triggers drive it. [`StatisticsLedger::start_session`] runs once per load and advances
//! `cumulative_days` at most once per calendar date. [`StatisticsLedger::record_run`] runs after
//! each successful run and counts it only when it produced pages.
//!
//! Reads and writes are not transactional; one writer per store is assumed.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use storage::{keys, KeyValueStore};
use tracing::{info, instrument};

use crate::error::LedgerError;

/// `cumulative_days` for a user with no stored state.
pub const SEED_CUMULATIVE_DAYS: u64 = 2045;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistentCounters {
    pub cumulative_days: u64,
    pub last_visit_date: NaiveDate,
    pub total_sessions: u64,
    pub total_pages_read: u64,
}

/// How the current session start related to the stored visit date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitKind {
    /// Nothing stored yet; counters were seeded.
    FirstVisit,
    /// Stored date differs from today; `cumulative_days` advanced by one.
    NewDay,
    /// Same calendar date as the stored visit; nothing changed.
    SameDay,
}

pub struct StatisticsLedger {
    store: Arc<dyn KeyValueStore>,
    counters: PersistentCounters,
    visit: VisitKind,
}

impl StatisticsLedger {
    /// Loads counters and applies the session-start transition for `today`.
    #[instrument(skip(store))]
    pub async fn start_session(
        store: Arc<dyn KeyValueStore>,
        today: NaiveDate,
    ) -> Result<Self, LedgerError> {
        let today_str = today.format(DATE_FORMAT).to_string();
        let stored_days = store.get(keys::CUMULATIVE_DAYS).await?;
        let last_visit = store.get(keys::LAST_VISIT_DATE).await?;

        let (cumulative_days, visit) = match stored_days {
            None => {
                store
                    .set(keys::CUMULATIVE_DAYS, &SEED_CUMULATIVE_DAYS.to_string())
                    .await?;
                store.set(keys::LAST_VISIT_DATE, &today_str).await?;
                (SEED_CUMULATIVE_DAYS, VisitKind::FirstVisit)
            }
            Some(raw) => {
                let days = parse_counter(keys::CUMULATIVE_DAYS, &raw)?;
                if last_visit.as_deref() == Some(today_str.as_str()) {
                    (days, VisitKind::SameDay)
                } else {
                    let days = checked_increment(keys::CUMULATIVE_DAYS, days, 1)?;
                    store.set(keys::CUMULATIVE_DAYS, &days.to_string()).await?;
                    store.set(keys::LAST_VISIT_DATE, &today_str).await?;
                    (days, VisitKind::NewDay)
                }
            }
        };

        let total_sessions = load_counter(store.as_ref(), keys::TOTAL_SESSIONS).await?;
        let total_pages_read = load_counter(store.as_ref(), keys::TOTAL_PAGES_READ).await?;

        let counters = PersistentCounters {
            cumulative_days,
            last_visit_date: today,
            total_sessions,
            total_pages_read,
        };
        info!(
            ?visit,
            cumulative_days = counters.cumulative_days,
            total_sessions = counters.total_sessions,
            total_pages_read = counters.total_pages_read,
            "Session started"
        );

        Ok(Self {
            store,
            counters,
            visit,
        })
    }

    pub fn counters(&self) -> &PersistentCounters {
        &self.counters
    }

    pub fn visit(&self) -> VisitKind {
        self.visit
    }

    /// Counts a completed run. Returns false (and changes nothing) when `total_pages` is zero.
    ///
    /// Counters in memory change only after both values are persisted.
    #[instrument(skip(self))]
    pub async fn record_run(&mut self, total_pages: u64) -> Result<bool, LedgerError> {
        if total_pages == 0 {
            info!("Run produced no pages, statistics unchanged");
            return Ok(false);
        }

        let total_pages_read = checked_increment(
            keys::TOTAL_PAGES_READ,
            self.counters.total_pages_read,
            total_pages,
        )?;
        let total_sessions = checked_increment(keys::TOTAL_SESSIONS, self.counters.total_sessions, 1)?;

        self.store
            .set(keys::TOTAL_PAGES_READ, &total_pages_read.to_string())
            .await?;
        self.store
            .set(keys::TOTAL_SESSIONS, &total_sessions.to_string())
            .await?;

        self.counters.total_pages_read = total_pages_read;
        self.counters.total_sessions = total_sessions;
        info!(total_sessions, total_pages_read, "Statistics updated");
        Ok(true)
    }
}

async fn load_counter(store: &dyn KeyValueStore, key: &'static str) -> Result<u64, LedgerError> {
    match store.get(key).await? {
        Some(raw) => parse_counter(key, &raw),
        None => Ok(0),
    }
}

fn parse_counter(key: &'static str, raw: &str) -> Result<u64, LedgerError> {
    raw.trim()
        .parse()
        .map_err(|_| LedgerError::InvalidCounter {
            key,
            value: raw.to_string(),
        })
}

fn checked_increment(key: &'static str, current: u64, by: u64) -> Result<u64, LedgerError> {
    current
        .checked_add(by)
        .ok_or(LedgerError::CounterOverflow { key, current })
}
