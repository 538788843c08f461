//! CLI command implementations.

pub mod allocate;
pub mod expand;
pub mod finish;
pub mod history;
pub mod init;
pub mod start;

use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::database::{DatabaseConnection, ExecutionStore};

/// Load configuration from the explicit file if given, otherwise from the
/// standard lookup (defaults, `.parampool/` files, environment).
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path).context("Failed to load configuration"),
        None => ConfigLoader::load().context("Failed to load configuration"),
    }
}

/// Open the execution store backing the configured database, running any
/// pending migrations first.
pub async fn open_store(config: &Config) -> Result<ExecutionStore> {
    let database_url = format!("sqlite:{}", config.database.path);
    let connection = DatabaseConnection::new(&database_url, config.database.max_connections)
        .await
        .context("Failed to open database")?;
    connection
        .migrate()
        .await
        .context("Failed to run database migrations")?;
    Ok(ExecutionStore::new(connection.pool().clone()))
}
