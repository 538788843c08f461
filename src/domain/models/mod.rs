//! Domain models: candidate pools, execution records, classification and
//! selection.

pub mod classification;
pub mod config;
pub mod execution;
pub mod pool;
pub mod selection;

pub use classification::PoolClassification;
pub use config::{Config, DatabaseConfig, LoggingConfig};
pub use execution::{BuildResult, ExecutionRecord, Outcome};
pub use pool::CandidatePool;
pub use selection::{select_value, Selection, SelectionTier};
