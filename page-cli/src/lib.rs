//! # page-cli
//!
//! CLI foundation for `hwp-pages`: argument parsing, document input, result rendering and the
//! interactive session. Pipeline logic lives in page-estimator.

pub mod cli;
pub mod input;
pub mod interactive;
pub mod presenter;

pub use cli::{Cli, Commands};
pub use input::{load_documents, parse_document_spec, DocumentSpec};
