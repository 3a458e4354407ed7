//! Component factory: builds the store, LLM client and [`App`] from config.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use std::sync::Arc;
use storage::{InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore};
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::{AppConfig, BaseConfig};
use crate::ledger::StatisticsLedger;
use crate::processor::Processor;
use crate::title::TitleSynthesizer;

/// Today's calendar date (UTC), the unit `cumulative_days` advances by.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Creates the counter store: SQLite at `DATABASE_URL`, or in-memory when `ephemeral`.
#[instrument(skip(config))]
pub async fn create_store(config: &BaseConfig, ephemeral: bool) -> Result<Arc<dyn KeyValueStore>> {
    if ephemeral {
        info!("Using in-memory statistics store");
        return Ok(Arc::new(InMemoryKeyValueStore::new()));
    }
    info!(database_url = %config.database_url, "Using SQLite statistics store");
    let store = SqliteKeyValueStore::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to initialize SQLite store");
            anyhow::anyhow!("Failed to initialize SQLite store: {}", e)
        })?;
    Ok(Arc::new(store))
}

/// Wires store, ledger (session start for today), LLM client and processor into an [`App`].
pub async fn build_app(config: &AppConfig, ephemeral: bool) -> Result<App> {
    config.validate()?;
    let store = create_store(&config.base, ephemeral).await?;
    let ledger = StatisticsLedger::start_session(store, today()).await?;

    let client: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&config.llm));
    let synthesizer = TitleSynthesizer::new(client).with_model(config.llm.model());

    Ok(App::new(Processor::new(synthesizer, ledger)))
}
