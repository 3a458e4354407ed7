//! Shared test helpers: mock LLM client, store fixtures, document builders.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use llm_client::LlmClient;
use mockall::mock;
use page_core::Document;
use page_estimator::{Processor, StatisticsLedger, TitleSynthesizer};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use storage::{InMemoryKeyValueStore, KeyValueStore, StorageError};

mock! {
    pub Llm {}

    #[async_trait]
    impl LlmClient for Llm {
        async fn generate_content(&self, model: &str, prompt: &str) -> anyhow::Result<String>;
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// A document whose content is `chars` copies of `'가'`.
pub fn doc(title: &str, chars: usize) -> Document {
    Document::new(title, "가".repeat(chars))
}

pub async fn processor_with(
    client: impl LlmClient + 'static,
    store: Arc<dyn KeyValueStore>,
) -> Processor {
    let ledger = StatisticsLedger::start_session(store, today())
        .await
        .expect("session start");
    Processor::new(TitleSynthesizer::new(Arc::new(client)), ledger)
}

pub fn fresh_store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Store whose writes can be switched to fail, to simulate a broken disk mid-session.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryKeyValueStore,
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Database("disk full".to_string()));
        }
        self.inner.set(key, value).await
    }
}
