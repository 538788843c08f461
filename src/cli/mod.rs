//! Command-line interface.
//!
//! Each subcommand lives in its own module under [`commands`] and follows the
//! same shape: a clap `Args` struct, an output struct implementing
//! [`output::CommandOutput`], and an `execute` function.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser)]
#[command(name = "parampool")]
#[command(about = "Parampool - pool value allocation for repeated CI jobs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Path to a configuration file (overrides the default lookup)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// All parampool subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize parampool configuration and database
    Init(commands::init::InitArgs),

    /// Allocate a pool value to the current execution
    Allocate(commands::allocate::AllocateArgs),

    /// Record that an execution has started
    Start(commands::start::StartArgs),

    /// Record the terminal result of an execution
    Finish(commands::finish::FinishArgs),

    /// Show recorded executions and their pool values
    History(commands::history::HistoryArgs),

    /// Expand a pool expression without touching the database
    Expand(commands::expand::ExpandArgs),
}

/// Report a command failure and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
