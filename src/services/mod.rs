//! Service layer: orchestration over the domain algorithms and ports.

pub mod allocator;

pub use allocator::{AllocationReport, AllocationRequest, AllocationService, TERMINAL_LOOKBACK};
