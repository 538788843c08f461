//! SQLite implementation of the execution history and journal ports.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::models::{BuildResult, ExecutionRecord};
use crate::domain::ports::{ExecutionHistory, ExecutionJournal, HistoryError};
use crate::infrastructure::database::utils::parse_datetime;

/// Execution store over the `executions` and `pool_values` tables.
///
/// One store instance serves both ports: the allocator reads through
/// [`ExecutionHistory`], the CI-step commands write through
/// [`ExecutionJournal`].
#[derive(Clone)]
pub struct ExecutionStore {
    pool: SqlitePool,
}

impl ExecutionStore {
    /// Build a store over an already-connected pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load_values(
        &self,
        job: &str,
        number: u64,
    ) -> Result<HashMap<String, String>, HistoryError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT name, value FROM pool_values WHERE job = ? AND number = ?")
                .bind(job)
                .bind(number as i64)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().collect())
    }
}

#[async_trait]
impl ExecutionHistory for ExecutionStore {
    async fn executions(&self, job: &str) -> Result<Vec<ExecutionRecord>, HistoryError> {
        let rows: Vec<ExecutionRow> = sqlx::query_as(
            r#"SELECT job, number, started_at, result, finished_at FROM executions
               WHERE job = ? ORDER BY started_at DESC, number DESC"#,
        )
        .bind(job)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(HistoryError::UnknownJob(job.to_string()));
        }

        // One query for the whole job's published values instead of one per
        // execution; the allocator scans full job histories.
        let values: Vec<(i64, String, String)> =
            sqlx::query_as("SELECT number, name, value FROM pool_values WHERE job = ?")
                .bind(job)
                .fetch_all(&self.pool)
                .await?;

        let mut by_number: HashMap<u64, HashMap<String, String>> = HashMap::new();
        for (number, name, value) in values {
            by_number.entry(number as u64).or_default().insert(name, value);
        }

        rows.into_iter()
            .map(|row| {
                let mut record = ExecutionRecord::try_from(row)?;
                if let Some(published) = by_number.remove(&record.number) {
                    record.values = published;
                }
                Ok(record)
            })
            .collect()
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<ExecutionRecord>, HistoryError> {
        let rows: Vec<ExecutionRow> = sqlx::query_as(
            r#"SELECT job, number, started_at, result, finished_at FROM executions
               ORDER BY started_at DESC, number DESC LIMIT ?"#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let mut record = ExecutionRecord::try_from(row)?;
            record.values = self.load_values(&record.job, record.number).await?;
            records.push(record);
        }
        Ok(records)
    }
}

#[async_trait]
impl ExecutionJournal for ExecutionStore {
    async fn record_start(
        &self,
        job: &str,
        number: u64,
        started_at: DateTime<Utc>,
    ) -> Result<(), HistoryError> {
        sqlx::query(
            r#"INSERT INTO executions (job, number, started_at, result, finished_at)
               VALUES (?, ?, ?, NULL, NULL)
               ON CONFLICT (job, number) DO NOTHING"#,
        )
        .bind(job)
        .bind(number as i64)
        .bind(started_at.to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn record_result(
        &self,
        job: &str,
        number: u64,
        result: BuildResult,
        finished_at: DateTime<Utc>,
    ) -> Result<(), HistoryError> {
        let outcome = sqlx::query(
            "UPDATE executions SET result = ?, finished_at = ? WHERE job = ? AND number = ?",
        )
        .bind(result.as_str())
        .bind(finished_at.to_rfc3339())
        .bind(job)
        .bind(number as i64)
        .execute(&self.pool)
        .await?;

        if outcome.rows_affected() == 0 {
            return Err(HistoryError::UnknownExecution {
                job: job.to_string(),
                number,
            });
        }
        Ok(())
    }

    async fn publish_value(
        &self,
        job: &str,
        number: u64,
        name: &str,
        value: &str,
    ) -> Result<(), HistoryError> {
        sqlx::query(
            r#"INSERT INTO pool_values (job, number, name, value)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (job, number, name) DO UPDATE SET value = excluded.value"#,
        )
        .bind(job)
        .bind(number as i64)
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ExecutionRow {
    job: String,
    number: i64,
    started_at: String,
    result: Option<String>,
    finished_at: Option<String>,
}

impl TryFrom<ExecutionRow> for ExecutionRecord {
    type Error = HistoryError;

    fn try_from(row: ExecutionRow) -> Result<Self, Self::Error> {
        let started_at = parse_datetime(&row.started_at)?;
        let finished_at = row.finished_at.as_deref().map(parse_datetime).transpose()?;
        let result = row
            .result
            .as_deref()
            .map(|s| BuildResult::from_str(s).ok_or_else(|| HistoryError::UnknownResult(s.to_string())))
            .transpose()?;

        Ok(Self {
            job: row.job,
            number: row.number as u64,
            started_at,
            result,
            finished_at,
            values: HashMap::new(),
        })
    }
}
