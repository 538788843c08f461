//! Read port over the shared execution history.

use async_trait::async_trait;

use crate::domain::models::ExecutionRecord;
use crate::domain::ports::errors::HistoryError;

/// Read port over the shared execution history.
///
/// The allocator rebuilds its whole view of the world through this trait on
/// every allocation; nothing is cached between calls.
#[async_trait]
pub trait ExecutionHistory: Send + Sync {
    /// All recorded executions of `job`, newest-first, with their published
    /// pool values attached.
    ///
    /// A job with no recorded executions is unresolved and yields
    /// [`HistoryError::UnknownJob`] rather than an empty list.
    async fn executions(&self, job: &str) -> Result<Vec<ExecutionRecord>, HistoryError>;

    /// The most recent executions across every registered job, newest-first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<ExecutionRecord>, HistoryError>;
}
