//! Implementation of the `parampool allocate` command.
//!
//! Prints the selected value alone on stdout so shell steps can capture it
//! directly; diagnostics go to stderr through tracing.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::{AllocationReport, AllocationRequest, AllocationService};

/// Arguments for `parampool allocate`.
#[derive(Args, Debug)]
pub struct AllocateArgs {
    /// Parameter name to allocate a value for
    pub name: String,

    /// Pool expression, e.g. "vm[1..3]" or "red, green, blue"
    #[arg(short, long)]
    pub values: String,

    /// Job the current execution belongs to
    #[arg(long, env = "PARAMPOOL_JOB")]
    pub job: String,

    /// Run number of the current execution
    #[arg(short, long, env = "PARAMPOOL_NUMBER")]
    pub number: u64,

    /// Jobs whose histories to scan instead of the current job (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub jobs: Vec<String>,

    /// Prefer a value whose most recent terminal execution failed
    #[arg(long)]
    pub prefer_error: bool,

    /// Print the allocation as NAME=value, ready for shell export
    #[arg(long)]
    pub export: bool,
}

/// Output of `parampool allocate`.
#[derive(Debug, serde::Serialize)]
pub struct AllocateOutput {
    /// The full allocation report.
    #[serde(flatten)]
    pub report: AllocationReport,
    /// Render as `NAME=value` instead of the bare value.
    #[serde(skip)]
    pub export: bool,
}

impl CommandOutput for AllocateOutput {
    fn to_human(&self) -> String {
        if self.export {
            format!("{}={}", self.report.parameter, self.report.value)
        } else {
            self.report.value.clone()
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.report).unwrap_or_default()
    }
}

/// Execute the allocate command.
pub async fn execute(args: AllocateArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = Arc::new(super::open_store(config).await?);
    let service = AllocationService::new(store.clone(), store);

    let request = AllocationRequest {
        job: args.job,
        number: args.number,
        parameter: args.name,
        pool_spec: args.values,
        target_jobs: args.jobs,
        prefer_error: args.prefer_error,
    };

    let report = service.allocate(request).await?;

    output(
        &AllocateOutput {
            report,
            export: args.export,
        },
        json_mode,
    );
    Ok(())
}
