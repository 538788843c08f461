//! Error types for the execution history and journal ports.

use thiserror::Error;

/// Errors surfaced by the execution history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The job has never recorded an execution.
    #[error("job {0} has no recorded executions")]
    UnknownJob(String),

    /// The run was never recorded, so there is nothing to update.
    #[error("execution {job} #{number} has not been recorded")]
    UnknownExecution {
        /// Job the run belongs to.
        job: String,
        /// Run number within the job.
        number: u64,
    },

    /// The underlying database query failed.
    #[error("query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    /// A stored result name is not a known result category.
    #[error("unknown result category: {0}")]
    UnknownResult(String),
}
