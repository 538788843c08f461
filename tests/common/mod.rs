//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use chrono::{DateTime, Duration, Utc};
use parampool::domain::ports::ExecutionJournal;
use parampool::infrastructure::database::ExecutionStore;
use parampool::BuildResult;
use sqlx::SqlitePool;

/// Create an in-memory SQLite database for testing
///
/// Creates a fresh in-memory database with migrations applied.
/// Each call creates a completely isolated database instance.
pub async fn setup_test_db() -> SqlitePool {
    // One connection: an in-memory database exists per connection, so a
    // larger pool would hand concurrent queries an empty database.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Teardown test database
///
/// Closes the connection pool and cleans up resources.
#[allow(dead_code)]
pub async fn teardown_test_db(pool: SqlitePool) {
    pool.close().await;
}

/// A start time `minutes_ago` minutes in the past, for ordering seeds.
pub fn minutes_ago(minutes: i64) -> DateTime<Utc> {
    Utc::now() - Duration::minutes(minutes)
}

/// Seed one execution through the journal port.
///
/// `result` of `None` leaves the execution running; `values` are published
/// under their parameter names. The terminal timestamp, when there is one,
/// lands one minute after the start.
#[allow(dead_code)]
pub async fn seed_execution(
    store: &ExecutionStore,
    job: &str,
    number: u64,
    started_at: DateTime<Utc>,
    result: Option<BuildResult>,
    values: &[(&str, &str)],
) {
    store
        .record_start(job, number, started_at)
        .await
        .expect("failed to record start");

    for (name, value) in values {
        store
            .publish_value(job, number, name, value)
            .await
            .expect("failed to publish value");
    }

    if let Some(result) = result {
        store
            .record_result(job, number, result, started_at + Duration::minutes(1))
            .await
            .expect("failed to record result");
    }
}
