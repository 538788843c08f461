//! SQLite persistence for the execution history.

pub mod connection;
pub mod execution_store;
pub mod utils;

pub use connection::DatabaseConnection;
pub use execution_store::ExecutionStore;
