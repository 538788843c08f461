//! Domain errors for pool-value allocation.

use thiserror::Error;

use crate::domain::ports::HistoryError;

/// Errors that abort an allocation.
///
/// Allocation failures are not retried: parsing and selection problems are
/// surfaced immediately with a message the CI log can show as-is. Partial
/// history data (a record with no published value) is skipped during the
/// scan and never reaches this type.
#[derive(Debug, Error)]
pub enum AllocationError {
    /// The pool specification expanded to no values at all.
    #[error("no values parsed from the pool specification for parameter {parameter}")]
    EmptyPool {
        /// Parameter name the allocation was requested for.
        parameter: String,
    },

    /// A configured target job has never recorded an execution.
    #[error("target job {0} has no recorded executions")]
    UnresolvedJob(String),

    /// Every priority tier came up empty; all pool values are claimed.
    #[error(
        "no allowable value found for parameter {parameter}; all of these values were taken: [{}]",
        .pool.join(", ")
    )]
    NoValueAvailable {
        /// Parameter name the allocation was requested for.
        parameter: String,
        /// The full candidate pool, in pool order.
        pool: Vec<String>,
    },

    /// The history store failed while gathering or recording executions.
    #[error("history lookup failed: {0}")]
    History(#[from] HistoryError),
}

/// Result alias for allocation operations.
pub type AllocationResult<T> = Result<T, AllocationError>;
