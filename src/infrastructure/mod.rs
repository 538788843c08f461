//! Infrastructure layer: SQLite-backed execution store and configuration
//! loading.

pub mod config;
pub mod database;
