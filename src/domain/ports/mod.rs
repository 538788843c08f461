//! Port trait definitions (Hexagonal Architecture)
//!
//! The allocator never reaches into a shared job store directly; it is
//! handed these interfaces instead:
//! - [`ExecutionHistory`]: read-only access to past executions of a job
//! - [`ExecutionJournal`]: recording of starts, results, and published values
//!
//! Splitting reads from writes keeps the allocation algorithm's dependency
//! read-only; the journal side exists only so a CI step can stand in for
//! the host that would otherwise maintain the history.

pub mod errors;
pub mod history;
pub mod journal;

pub use errors::HistoryError;
pub use history::ExecutionHistory;
pub use journal::ExecutionJournal;
