use thiserror::Error;

use crate::types::DocumentId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// At least one document must always exist.
    #[error("Cannot remove the only remaining document")]
    LastDocument,

    #[error("Document not found: {0}")]
    NotFound(DocumentId),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
