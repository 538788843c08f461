//! Execution records read back from the history store.
//!
//! An execution is one run of a job. Records are consumed read-only by the
//! allocator; the only thing it ever writes is the pool value published to
//! the current run.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal result category of a finished execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildResult {
    /// Finished cleanly.
    Success,
    /// Finished with a non-fatal problem (e.g. flaky tests).
    Unstable,
    /// Finished with an error.
    Failure,
    /// Stopped before finishing.
    Aborted,
    /// Skipped without ever really running.
    NotBuilt,
}

impl BuildResult {
    /// Stable lowercase name, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Unstable => "unstable",
            Self::Failure => "failure",
            Self::Aborted => "aborted",
            Self::NotBuilt => "not_built",
        }
    }

    /// Parse a result name, accepting the common spelling variants.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "success" => Some(Self::Success),
            "unstable" => Some(Self::Unstable),
            "failure" | "failed" => Some(Self::Failure),
            "aborted" => Some(Self::Aborted),
            "not_built" | "not-built" | "notbuilt" => Some(Self::NotBuilt),
            _ => None,
        }
    }

    /// Whether this result leaves the value it used safe to recycle.
    pub fn is_functional(&self) -> bool {
        matches!(self, Self::Success | Self::Unstable)
    }
}

/// Classified outcome of one execution, for allocation purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The execution has not reached a terminal state.
    Running,
    /// Terminated successfully or with a non-fatal result.
    Functional,
    /// Terminated with any other result, including errors and aborts.
    Failed,
}

impl Outcome {
    /// Stable lowercase name, for logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Functional => "functional",
            Self::Failed => "failed",
        }
    }
}

/// One past or current run of a target job, as read from the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Job this run belongs to.
    pub job: String,
    /// Run number within the job; the execution's identifier.
    pub number: u64,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Terminal result, or `None` while the run is still going.
    pub result: Option<BuildResult>,
    /// When the run finished, if it has.
    pub finished_at: Option<DateTime<Utc>>,
    /// Pool values published to this run, keyed by parameter name.
    pub values: HashMap<String, String>,
}

impl ExecutionRecord {
    /// Create a record for a run that just started.
    pub fn new(job: impl Into<String>, number: u64, started_at: DateTime<Utc>) -> Self {
        Self {
            job: job.into(),
            number,
            started_at,
            result: None,
            finished_at: None,
            values: HashMap::new(),
        }
    }

    /// Set the terminal result.
    pub fn with_result(mut self, result: BuildResult) -> Self {
        self.result = Some(result);
        self
    }

    /// Attach a published pool value.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Whether the run has not reached a terminal state.
    pub fn is_running(&self) -> bool {
        self.result.is_none()
    }

    /// Outcome for classification: running wins, then the terminal mapping.
    pub fn outcome(&self) -> Outcome {
        match self.result {
            None => Outcome::Running,
            Some(result) if result.is_functional() => Outcome::Functional,
            Some(_) => Outcome::Failed,
        }
    }

    /// Value previously published to this run under `name`.
    pub fn assigned_value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_record_outcome() {
        let record = ExecutionRecord::new("deploy", 7, Utc::now());
        assert!(record.is_running());
        assert_eq!(record.outcome(), Outcome::Running);
    }

    #[test]
    fn test_terminal_outcome_mapping() {
        let cases = [
            (BuildResult::Success, Outcome::Functional),
            (BuildResult::Unstable, Outcome::Functional),
            (BuildResult::Failure, Outcome::Failed),
            (BuildResult::Aborted, Outcome::Failed),
            (BuildResult::NotBuilt, Outcome::Failed),
        ];
        for (result, expected) in cases {
            let record = ExecutionRecord::new("deploy", 1, Utc::now()).with_result(result);
            assert_eq!(record.outcome(), expected, "result {result:?}");
            assert!(!record.is_running());
        }
    }

    #[test]
    fn test_assigned_value_lookup() {
        let record = ExecutionRecord::new("deploy", 3, Utc::now()).with_value("VM", "vm2");
        assert_eq!(record.assigned_value("VM"), Some("vm2"));
        assert_eq!(record.assigned_value("OTHER"), None);
    }

    #[test]
    fn test_build_result_round_trip() {
        for result in [
            BuildResult::Success,
            BuildResult::Unstable,
            BuildResult::Failure,
            BuildResult::Aborted,
            BuildResult::NotBuilt,
        ] {
            assert_eq!(BuildResult::from_str(result.as_str()), Some(result));
        }
        assert_eq!(BuildResult::from_str("not-built"), Some(BuildResult::NotBuilt));
        assert_eq!(BuildResult::from_str("bogus"), None);
    }
}
