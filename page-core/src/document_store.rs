//! Ordered in-memory list of documents. Never empty.

use tracing::debug;

use crate::error::{DocumentError, Result};
use crate::types::{Document, DocumentId};

/// Owns the user's documents. List order is the report order and survives edits.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// A store holding a single blank document.
    pub fn new() -> Self {
        Self {
            documents: vec![Document::blank()],
        }
    }

    /// Builds a store from existing documents; an empty list yields one blank document.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        if documents.is_empty() {
            return Self::new();
        }
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Zero-based position of the document in display order.
    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }

    /// Appends a blank document and returns its id.
    pub fn add_document(&mut self) -> DocumentId {
        let doc = Document::blank();
        let id = doc.id;
        self.documents.push(doc);
        debug!(document_id = %id, count = self.documents.len(), "Document added");
        id
    }

    /// Removes a document. Rejected when it is the only one left.
    pub fn remove_document(&mut self, id: DocumentId) -> Result<Document> {
        let index = self.position(id).ok_or(DocumentError::NotFound(id))?;
        if self.documents.len() == 1 {
            return Err(DocumentError::LastDocument);
        }
        let removed = self.documents.remove(index);
        debug!(document_id = %id, count = self.documents.len(), "Document removed");
        Ok(removed)
    }

    pub fn update_title(&mut self, id: DocumentId, title: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.title = title.into();
        Ok(())
    }

    pub fn update_content(&mut self, id: DocumentId, content: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.content = content.into();
        Ok(())
    }

    fn get_mut(&mut self, id: DocumentId) -> Result<&mut Document> {
        self.documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(DocumentError::NotFound(id))
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}
