//! Domain layer for the parampool allocator.
//!
//! Contains the pure allocation algorithms (range expansion, outcome
//! classification, value selection) and the port traits the orchestration
//! depends on.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{AllocationError, AllocationResult};
