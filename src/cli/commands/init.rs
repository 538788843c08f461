//! Implementation of the `parampool init` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tokio::fs;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::database::DatabaseConnection;

/// Arguments for `parampool init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force reinitialization even if already initialized
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Output of `parampool init`.
#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    /// Whether initialization ran (false when already initialized).
    pub success: bool,
    /// Human-readable summary of what happened.
    pub message: String,
    /// Directory that was initialized.
    pub initialized_path: PathBuf,
    /// Whether the default configuration file was written.
    pub config_written: bool,
    /// Whether the database was created and migrated.
    pub database_initialized: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.config_written {
            lines.push("\nWrote default configuration to .parampool/config.yaml".to_string());
        }
        if self.database_initialized {
            lines.push("Database initialized at .parampool/parampool.db".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Execute the init command.
pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };

    let pool_dir = target_path.join(".parampool");

    // Check if already initialized
    if pool_dir.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Already initialized. Use --force to reinitialize.".to_string(),
            initialized_path: target_path,
            config_written: false,
            database_initialized: false,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    // If forcing, remove existing
    if args.force && pool_dir.exists() {
        fs::remove_dir_all(&pool_dir)
            .await
            .context("Failed to remove existing .parampool directory")?;
    }

    fs::create_dir_all(&pool_dir)
        .await
        .with_context(|| format!("Failed to create {}", pool_dir.display()))?;

    // Write the default configuration so operators have something to edit
    let config = Config::default();
    let config_path = pool_dir.join("config.yaml");
    let rendered =
        serde_yaml::to_string(&config).context("Failed to render default configuration")?;
    fs::write(&config_path, rendered)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    // Initialize database
    let db_path = pool_dir.join("parampool.db");
    let db_url = format!("sqlite:{}", db_path.display());
    let connection = DatabaseConnection::new(&db_url, config.database.max_connections)
        .await
        .context("Failed to initialize database")?;
    connection
        .migrate()
        .await
        .context("Failed to run database migrations")?;
    connection.close().await;

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Reinitialized successfully.".to_string()
        } else {
            "Initialized successfully.".to_string()
        },
        initialized_path: target_path,
        config_written: true,
        database_initialized: true,
    };

    output(&output_data, json_mode);
    Ok(())
}
