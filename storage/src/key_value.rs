use async_trait::async_trait;

use crate::error::StorageError;

/// Keys used by the statistics ledger. Values are stored as plain strings.
pub mod keys {
    /// Calendar date of the last visit, `YYYY-MM-DD`.
    pub const LAST_VISIT_DATE: &str = "lastVisitDate";
    pub const CUMULATIVE_DAYS: &str = "cumulativeDays";
    pub const TOTAL_SESSIONS: &str = "totalSessions";
    pub const TOTAL_PAGES_READ: &str = "totalPagesRead";
}

/// String-keyed durable storage. A missing key (`None`) is distinct from any stored value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
