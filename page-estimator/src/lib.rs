//! # page-estimator
//!
//! The processing pipeline behind the `hwp-pages` CLI:
//!
//! - [`title`] – overarching title synthesis via an [`llm_client::LlmClient`]
//! - [`ledger`] – cross-session counters (days visited, sessions, pages read)
//! - [`processor`] – one run: estimate → title → token → statistics
//! - [`state`] – explicit run state (Idle / Running / Succeeded / Failed)
//! - [`app`] – session facade over documents, processor and state
//! - [`config`], [`components`] – env configuration and wiring

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod ledger;
pub mod processor;
pub mod state;
pub mod title;

pub use app::{App, COPY_ACK_WINDOW};
pub use components::{build_app, create_store};
pub use config::{AppConfig, BaseConfig};
pub use error::{LedgerError, ProcessError, PROCESSING_FAILURE_MESSAGE};
pub use ledger::{PersistentCounters, StatisticsLedger, VisitKind, SEED_CUMULATIVE_DAYS};
pub use processor::{ProcessOutcome, Processor};
pub use state::RunState;
pub use title::{collect_titles, TitleSynthesizer, FALLBACK_TITLE};
