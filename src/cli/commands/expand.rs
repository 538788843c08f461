//! Implementation of the `parampool expand` command.
//!
//! Debugging aid: shows what a pool expression expands to, one value per
//! line, without opening the database.

use anyhow::Result;
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::CandidatePool;

/// Arguments for `parampool expand`.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Pool expression, e.g. "vm[1..3]" or "red, green, blue"
    pub values: String,
}

/// Output of `parampool expand`.
#[derive(Debug, serde::Serialize)]
pub struct ExpandOutput {
    /// Expanded values, in pool order.
    pub values: Vec<String>,
    /// Number of values in the pool.
    pub count: usize,
}

impl CommandOutput for ExpandOutput {
    fn to_human(&self) -> String {
        self.values.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Execute the expand command.
pub fn execute(args: ExpandArgs, json_mode: bool) -> Result<()> {
    let pool = CandidatePool::parse(&args.values);

    let output_data = ExpandOutput {
        count: pool.len(),
        values: pool.to_vec(),
    };
    output(&output_data, json_mode);
    Ok(())
}
