//! Implementation of the `parampool start` command.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::domain::ports::ExecutionJournal;

/// Arguments for `parampool start`.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Job the execution belongs to
    #[arg(long, env = "PARAMPOOL_JOB")]
    pub job: String,

    /// Run number of the execution
    #[arg(short, long, env = "PARAMPOOL_NUMBER")]
    pub number: u64,
}

/// Output of `parampool start`.
#[derive(Debug, serde::Serialize)]
pub struct StartOutput {
    /// Job the execution belongs to.
    pub job: String,
    /// Run number of the execution.
    pub number: u64,
    /// Recorded start time.
    pub started_at: DateTime<Utc>,
}

impl CommandOutput for StartOutput {
    fn to_human(&self) -> String {
        format!("Recorded start of {} #{}", self.job, self.number)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Execute the start command.
pub async fn execute(args: StartArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = super::open_store(config).await?;
    let started_at = Utc::now();

    store.record_start(&args.job, args.number, started_at).await?;

    let output_data = StartOutput {
        job: args.job,
        number: args.number,
        started_at,
    };
    output(&output_data, json_mode);
    Ok(())
}
