//! PostgreSQL implementation of the work-time repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::WorkTime;
use crate::domain::repositories::WorkTimeRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct WorkTimeRow {
    id: i64,
    value: f64,
}

impl From<WorkTimeRow> for WorkTime {
    fn from(row: WorkTimeRow) -> Self {
        WorkTime::new(row.id, row.value)
    }
}

/// PostgreSQL repository for work-time fractions.
pub struct PgWorkTimeRepository {
    pool: Arc<PgPool>,
}

impl PgWorkTimeRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkTimeRepository for PgWorkTimeRepository {
    async fn create(&self, value: f64) -> Result<WorkTime, AppError> {
        let row = sqlx::query_as::<_, WorkTimeRow>(
            "INSERT INTO work_time (value) VALUES ($1) RETURNING id, value",
        )
        .bind(value)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<WorkTime>, AppError> {
        let row =
            sqlx::query_as::<_, WorkTimeRow>("SELECT id, value FROM work_time WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_value(&self, value: f64) -> Result<Option<WorkTime>, AppError> {
        let row =
            sqlx::query_as::<_, WorkTimeRow>("SELECT id, value FROM work_time WHERE value = $1")
                .bind(value)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<WorkTime>, AppError> {
        let rows =
            sqlx::query_as::<_, WorkTimeRow>("SELECT id, value FROM work_time ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, value: f64) -> Result<Option<WorkTime>, AppError> {
        let row = sqlx::query_as::<_, WorkTimeRow>(
            "UPDATE work_time SET value = $2 WHERE id = $1 RETURNING id, value",
        )
        .bind(id)
        .bind(value)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM work_time WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
