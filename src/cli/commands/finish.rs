//! Implementation of the `parampool finish` command.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{BuildResult, Config};
use crate::domain::ports::ExecutionJournal;

/// Arguments for `parampool finish`.
#[derive(Args, Debug)]
pub struct FinishArgs {
    /// Terminal result: success, unstable, failure, aborted or not-built
    pub result: String,

    /// Job the execution belongs to
    #[arg(long, env = "PARAMPOOL_JOB")]
    pub job: String,

    /// Run number of the execution
    #[arg(short, long, env = "PARAMPOOL_NUMBER")]
    pub number: u64,
}

/// Output of `parampool finish`.
#[derive(Debug, serde::Serialize)]
pub struct FinishOutput {
    /// Job the execution belongs to.
    pub job: String,
    /// Run number of the execution.
    pub number: u64,
    /// Recorded terminal result.
    pub result: BuildResult,
    /// Recorded finish time.
    pub finished_at: DateTime<Utc>,
}

impl CommandOutput for FinishOutput {
    fn to_human(&self) -> String {
        format!(
            "Recorded {} for {} #{}",
            self.result.as_str(),
            self.job,
            self.number
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Execute the finish command.
pub async fn execute(args: FinishArgs, config: &Config, json_mode: bool) -> Result<()> {
    let result = BuildResult::from_str(&args.result).ok_or_else(|| {
        anyhow!(
            "Unknown result {:?}; expected success, unstable, failure, aborted or not-built",
            args.result
        )
    })?;

    let store = super::open_store(config).await?;
    let finished_at = Utc::now();

    store
        .record_result(&args.job, args.number, result, finished_at)
        .await?;

    let output_data = FinishOutput {
        job: args.job,
        number: args.number,
        result,
        finished_at,
    };
    output(&output_data, json_mode);
    Ok(())
}
