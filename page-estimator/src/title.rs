//! Overarching title synthesis.
//!
//! Non-blank titles (document order, text as entered) go to the model in one prompt; the
//! trimmed reply is the title. With no titles the fixed fallback is used and no call is made.

use anyhow::{Context, Result};
use llm_client::{LlmClient, DEFAULT_MODEL};
use page_core::Document;
use prompt::build_title_prompt;
use std::sync::Arc;
use tracing::{info, instrument};

/// Title used when no document has a title ("composite title, no titles entered").
pub const FALLBACK_TITLE: &str = "종합 제목 (입력된 제목 없음)";

/// Titles of all documents with non-blank titles, in document order.
pub fn collect_titles(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .filter(|d| !d.has_blank_title())
        .map(|d| d.title.clone())
        .collect()
}

#[derive(Clone)]
pub struct TitleSynthesizer {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl TitleSynthesizer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the generated title, or [`FALLBACK_TITLE`] when there is nothing to summarize.
    ///
    /// Any model failure, including a blank reply, is an error.
    #[instrument(skip(self, documents), fields(model = %self.model))]
    pub async fn synthesize(&self, documents: &[Document]) -> Result<String> {
        let titles = collect_titles(documents);
        if titles.is_empty() {
            info!("No titles entered, using fallback title");
            return Ok(FALLBACK_TITLE.to_string());
        }

        let prompt = build_title_prompt(&titles);
        info!(title_count = titles.len(), "Requesting overarching title");

        let reply = self
            .client
            .generate_content(&self.model, &prompt)
            .await
            .context("Title generation request failed")?;

        let title = reply.trim();
        if title.is_empty() {
            anyhow::bail!("Model returned an empty title");
        }
        info!(title = %title, "Generated title");
        Ok(title.to_string())
    }
}
