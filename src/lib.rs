//! Parampool - pool value allocation for repeated CI jobs
//!
//! Parampool hands each execution of a repeated job one value out of a finite,
//! ordered pool of candidate strings (virtual machines, device slots, staging
//! accounts). It scans the recent execution history to see which values are in
//! use or recently failed, then picks the best free candidate and publishes it
//! to the current run.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pool expansion, outcome classification and
//!   value selection, plus the history/journal ports
//! - **Service Layer** (`services`): The allocation pipeline tying the domain
//!   pieces together
//! - **Infrastructure Layer** (`infrastructure`): SQLite-backed execution
//!   store and configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use parampool::services::{AllocationRequest, AllocationService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // let store = Arc::new(...);
//!     // let service = AllocationService::new(store.clone(), store);
//!     // let report = service.allocate(AllocationRequest { .. }).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    BuildResult, CandidatePool, Config, DatabaseConfig, ExecutionRecord, LoggingConfig, Outcome,
    PoolClassification, Selection, SelectionTier,
};
pub use domain::ports::{ExecutionHistory, ExecutionJournal, HistoryError};
pub use domain::{AllocationError, AllocationResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AllocationReport, AllocationRequest, AllocationService, TERMINAL_LOOKBACK};
