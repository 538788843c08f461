//! Configuration loading with hierarchical merging.

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
