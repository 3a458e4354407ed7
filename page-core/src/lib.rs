//! # page-core
//!
//! Core types for the HWP page estimator: [`Document`], [`DocumentStore`], the page [`estimator`],
//! the [`AuthenticationToken`] format and tracing initialization. No I/O besides the log file;
//! used by page-estimator and page-cli.

pub mod document_store;
pub mod error;
pub mod estimator;
pub mod logger;
pub mod token;
pub mod types;

pub use document_store::DocumentStore;
pub use error::{DocumentError, Result};
pub use estimator::{
    char_count, estimate_all, estimate_document, page_count, Estimate, PAGE_CAPACITY,
    UNTITLED_DOCUMENT,
};
pub use logger::init_tracing;
pub use token::{AuthenticationToken, MINUTES_PER_PAGE, TOKEN_DELIMITER, TOKEN_TAG};
pub use types::{CalculationResult, Document, DocumentId};
