//! Session facade: the document list, the processor and the current [`RunState`].

use page_core::{Document, DocumentError, DocumentId, DocumentStore};
use std::time::{Duration, Instant};
use tracing::info;

use crate::ledger::PersistentCounters;
use crate::processor::Processor;
use crate::state::RunState;

/// How long a copied token stays acknowledged.
pub const COPY_ACK_WINDOW: Duration = Duration::from_secs(2);

pub struct App {
    documents: DocumentStore,
    processor: Processor,
    state: RunState,
    copied_at: Option<Instant>,
}

impl App {
    pub fn new(processor: Processor) -> Self {
        Self::with_documents(processor, DocumentStore::new())
    }

    pub fn with_documents(processor: Processor, documents: DocumentStore) -> Self {
        Self {
            documents,
            processor,
            state: RunState::Idle,
            copied_at: None,
        }
    }

    pub fn documents(&self) -> &[Document] {
        self.documents.documents()
    }

    /// Replaces the whole document list, e.g. with documents read from files.
    pub fn set_documents(&mut self, documents: DocumentStore) {
        self.documents = documents;
        self.state = RunState::Idle;
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub async fn counters(&self) -> PersistentCounters {
        self.processor.counters().await
    }

    pub fn add_document(&mut self) -> DocumentId {
        self.documents.add_document()
    }

    pub fn remove_document(&mut self, id: DocumentId) -> Result<Document, DocumentError> {
        self.documents.remove_document(id)
    }

    pub fn update_title(&mut self, id: DocumentId, title: impl Into<String>) -> Result<(), DocumentError> {
        self.documents.update_title(id, title)
    }

    pub fn update_content(
        &mut self,
        id: DocumentId,
        content: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.documents.update_content(id, content)
    }

    /// Id of the document at a zero-based position.
    pub fn document_id_at(&self, index: usize) -> Option<DocumentId> {
        self.documents.documents().get(index).map(|d| d.id)
    }

    /// Runs the pipeline over the current documents and stores the resulting state.
    pub async fn process(&mut self) -> &RunState {
        self.state = RunState::Running;
        self.copied_at = None;
        let result = self.processor.process(self.documents.documents()).await;
        self.state = RunState::from(result);
        match &self.state {
            RunState::Succeeded(o) => info!(title = %o.generated_title, "Run succeeded"),
            RunState::Failed(e) => info!(error = %e, "Run failed"),
            _ => {}
        }
        &self.state
    }

    /// Returns the token text to copy and starts the acknowledgement window.
    pub fn copy_token(&mut self, now: Instant) -> Option<String> {
        let token = self.state.token()?;
        self.copied_at = Some(now);
        Some(token)
    }

    /// True while `now` is within [`COPY_ACK_WINDOW`] of the last copy.
    pub fn copy_acknowledged(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_ACK_WINDOW)
    }
}
