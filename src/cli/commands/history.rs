//! Implementation of the `parampool history` command.

use anyhow::Result;
use clap::Args;

use crate::cli::output::table::format_history_table;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, ExecutionRecord};
use crate::domain::ports::ExecutionHistory;

/// Arguments for `parampool history`.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Only show executions of this job
    #[arg(long)]
    pub job: Option<String>,

    /// Maximum number of executions to display
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Output of `parampool history`.
#[derive(Debug, serde::Serialize)]
pub struct HistoryOutput {
    /// Recorded executions, newest first.
    pub records: Vec<ExecutionRecord>,
}

impl CommandOutput for HistoryOutput {
    fn to_human(&self) -> String {
        if self.records.is_empty() {
            "No executions recorded.".to_string()
        } else {
            format_history_table(&self.records)
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.records).unwrap_or_default()
    }
}

/// Execute the history command.
pub async fn execute(args: HistoryArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = super::open_store(config).await?;

    let records = match &args.job {
        Some(job) => {
            let mut records = store.executions(job).await?;
            records.truncate(args.limit);
            records
        }
        None => store.list_recent(args.limit).await?,
    };

    output(&HistoryOutput { records }, json_mode);
    Ok(())
}
