use storage::StorageError;
use thiserror::Error;

/// The single user-visible message for any failed run.
pub const PROCESSING_FAILURE_MESSAGE: &str =
    "제목을 생성하거나 분량을 계산하는 중 오류가 발생했습니다.";

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid stored counter {key}: {value:?}")]
    InvalidCounter { key: &'static str, value: String },

    #[error("Stored counter {key} cannot grow past {current}")]
    CounterOverflow { key: &'static str, current: u64 },
}

/// Outcome of a failed `process` call. Causes are logged, never shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("A run is already in progress")]
    AlreadyRunning,

    #[error("{}", PROCESSING_FAILURE_MESSAGE)]
    Failed { cause: String },
}
