//! Write port for recording executions and published values.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::models::BuildResult;
use crate::domain::ports::errors::HistoryError;

/// Write port for recording executions and their published pool values.
///
/// In a full CI deployment the host maintains this data itself; the journal
/// lets a pipeline step do the bookkeeping explicitly (`start`, `finish`)
/// and lets the allocator publish the value it selected.
#[async_trait]
pub trait ExecutionJournal: Send + Sync {
    /// Record that `job` run `number` started at `started_at`.
    ///
    /// Idempotent: recording an already-known run keeps the original start
    /// time, so an allocation inside an already-started run is a no-op here.
    async fn record_start(
        &self,
        job: &str,
        number: u64,
        started_at: DateTime<Utc>,
    ) -> Result<(), HistoryError>;

    /// Record the terminal result of `job` run `number`.
    async fn record_result(
        &self,
        job: &str,
        number: u64,
        result: BuildResult,
        finished_at: DateTime<Utc>,
    ) -> Result<(), HistoryError>;

    /// Publish `value` under the parameter `name` for `job` run `number`,
    /// replacing any previously published value for that name.
    async fn publish_value(
        &self,
        job: &str,
        number: u64,
        name: &str,
        value: &str,
    ) -> Result<(), HistoryError>;
}
