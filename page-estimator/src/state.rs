//! Explicit run state driving presentation.

use crate::error::ProcessError;
use crate::processor::ProcessOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Succeeded(ProcessOutcome),
    /// No partial results survive a failure.
    Failed(ProcessError),
}

impl RunState {
    pub fn outcome(&self) -> Option<&ProcessOutcome> {
        match self {
            RunState::Succeeded(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ProcessError> {
        match self {
            RunState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Rendered token of the last successful run.
    pub fn token(&self) -> Option<String> {
        self.outcome().map(|o| o.token.to_string())
    }
}

impl From<Result<ProcessOutcome, ProcessError>> for RunState {
    fn from(result: Result<ProcessOutcome, ProcessError>) -> Self {
        match result {
            Ok(outcome) => RunState::Succeeded(outcome),
            Err(e) => RunState::Failed(e),
        }
    }
}
