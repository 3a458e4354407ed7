//! Storage crate: durable string-keyed storage for cross-session counters.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`key_value`] – KeyValueStore trait and well-known keys
//! - [`sqlite_store`] – SqliteKeyValueStore (SQLite)
//! - [`inmemory`] – InMemoryKeyValueStore
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod inmemory;
mod key_value;
mod sqlite_pool;
mod sqlite_store;

pub use error::StorageError;
pub use inmemory::InMemoryKeyValueStore;
pub use key_value::{keys, KeyValueStore};
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteKeyValueStore;
