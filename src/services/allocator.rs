//! Allocation of one pool value to the current execution.
//!
//! The service rescans execution history on every call; it keeps no state of
//! its own. Two allocations racing each other can therefore both pick the
//! same value when neither's publication is visible to the other yet -
//! collision avoidance is best-effort by design, and serializing the racing
//! writes is the host's problem, not this service's.

use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::errors::{AllocationError, AllocationResult};
use crate::domain::models::{
    select_value, CandidatePool, ExecutionRecord, PoolClassification, SelectionTier,
};
use crate::domain::ports::{ExecutionHistory, ExecutionJournal, HistoryError};

/// How many terminal executions the scan looks back over.
///
/// Still-running executions found before the bound is reached are always
/// classified and never count toward it, so the effective window is "every
/// running execution seen so far, plus up to this many terminal ones",
/// scanned newest-first.
pub const TERMINAL_LOOKBACK: usize = 21;

/// One allocation request for the current execution.
#[derive(Debug, Clone, Default)]
pub struct AllocationRequest {
    /// Job the current execution belongs to.
    pub job: String,
    /// Run number of the current execution.
    pub number: u64,
    /// Parameter name the selected value is published under.
    pub parameter: String,
    /// Pool specification text, e.g. `"vm[1..5], spare"`.
    pub pool_spec: String,
    /// Jobs whose histories are scanned. Empty means the current job only;
    /// a non-empty list replaces the default entirely.
    pub target_jobs: Vec<String>,
    /// Reassign a value whose most recent run failed, to reproduce it.
    pub prefer_error: bool,
}

/// What an allocation decided and why.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    /// Parameter name the value was published under.
    pub parameter: String,
    /// The selected pool value.
    pub value: String,
    /// Priority tier that produced the value.
    pub tier: SelectionTier,
    /// The full candidate pool, in pool order.
    pub pool: Vec<String>,
    /// Values seen on still-running executions.
    pub running: Vec<String>,
    /// Values whose most recent terminal run was functional.
    pub functional: Vec<String>,
    /// Values whose most recent terminal run failed.
    pub failed: Vec<String>,
    /// History records the scan actually processed.
    pub records_examined: usize,
}

/// Allocates pool values by scanning execution history through the ports.
pub struct AllocationService {
    history: Arc<dyn ExecutionHistory>,
    journal: Arc<dyn ExecutionJournal>,
}

impl AllocationService {
    /// Build a service over the given history and journal ports.
    pub fn new(history: Arc<dyn ExecutionHistory>, journal: Arc<dyn ExecutionJournal>) -> Self {
        Self { history, journal }
    }

    /// Allocate one pool value to the current execution.
    ///
    /// Steps:
    /// 1. Parse the pool specification; an empty pool is fatal.
    /// 2. Register the current execution as running (idempotent), so the
    ///    current job always resolves and the publication has a row to
    ///    attach to.
    /// 3. Gather the target jobs' histories and merge them newest-first.
    /// 4. Classify the scanned records, skipping the current run number.
    /// 5. Select a value and publish it under the parameter name.
    ///
    /// The current-execution skip compares run numbers only, so when several
    /// target jobs share a number the sibling's record is skipped too.
    #[instrument(
        skip(self, request),
        fields(job = %request.job, number = request.number, parameter = %request.parameter),
        err
    )]
    pub async fn allocate(&self, request: AllocationRequest) -> AllocationResult<AllocationReport> {
        let pool = CandidatePool::parse(&request.pool_spec);
        if pool.is_empty() {
            return Err(AllocationError::EmptyPool {
                parameter: request.parameter,
            });
        }
        info!(pool = %pool, "parsed candidate pool");

        self.journal
            .record_start(&request.job, request.number, Utc::now())
            .await?;

        let targets = if request.target_jobs.is_empty() {
            vec![request.job.clone()]
        } else {
            request.target_jobs.clone()
        };

        let gathered = try_join_all(targets.iter().map(|job| self.history.executions(job)))
            .await
            .map_err(|err| match err {
                HistoryError::UnknownJob(job) => AllocationError::UnresolvedJob(job),
                other => AllocationError::History(other),
            })?;

        let mut records: Vec<ExecutionRecord> = gathered.into_iter().flatten().collect();
        records.sort_by(|a, b| {
            b.started_at
                .cmp(&a.started_at)
                .then_with(|| b.number.cmp(&a.number))
        });

        let (classification, examined) =
            classify_history(&records, request.number, &request.parameter);
        info!(
            running = ?classification.running(),
            functional = ?classification.functional(),
            failed = ?classification.failed(),
            "classified pool values from {examined} scanned executions"
        );

        let selection = select_value(&pool, &classification, request.prefer_error).ok_or_else(
            || AllocationError::NoValueAvailable {
                parameter: request.parameter.clone(),
                pool: pool.to_vec(),
            },
        )?;

        self.journal
            .publish_value(
                &request.job,
                request.number,
                &request.parameter,
                &selection.value,
            )
            .await?;
        info!(value = %selection.value, tier = selection.tier.as_str(), "selected pool value");

        Ok(AllocationReport {
            parameter: request.parameter,
            value: selection.value,
            tier: selection.tier,
            pool: pool.to_vec(),
            running: classification.running().iter().cloned().collect(),
            functional: classification.functional().iter().cloned().collect(),
            failed: classification.failed().iter().cloned().collect(),
            records_examined: examined,
        })
    }
}

/// Fold the classifier over `records`, newest-first.
///
/// Skips the record matching the current run number, stops before processing
/// a record once [`TERMINAL_LOOKBACK`] terminal executions have been
/// examined, and skips (but still counts) records with no published value
/// for `parameter`. Returns the classification and how many records were
/// processed.
fn classify_history(
    records: &[ExecutionRecord],
    current_number: u64,
    parameter: &str,
) -> (PoolClassification, usize) {
    let mut classification = PoolClassification::new();
    let mut terminal_seen = 0usize;
    let mut examined = 0usize;

    for record in records {
        if record.number == current_number {
            continue;
        }
        // There can be running executions interleaved past many terminal
        // ones; the bound counts terminal executions only.
        if terminal_seen >= TERMINAL_LOOKBACK {
            break;
        }
        if !record.is_running() {
            terminal_seen += 1;
        }
        examined += 1;

        let outcome = record.outcome();
        match record.assigned_value(parameter) {
            Some(value) => {
                info!(
                    job = %record.job,
                    number = record.number,
                    value,
                    outcome = outcome.as_str(),
                    "examined execution"
                );
                classification = classification.observe(value, outcome);
            }
            None => {
                info!(
                    job = %record.job,
                    number = record.number,
                    outcome = outcome.as_str(),
                    "no value published for {parameter} in this execution, skipping"
                );
            }
        }
    }

    (classification, examined)
}
