//! PostgreSQL implementation of the activity record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    ActivityRecord, ActivityRecordDetail, LookupEntry, NewActivityRecord, ProfessorRef,
};
use crate::domain::repositories::ActivityRecordRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ActivityRecordRow {
    id: i64,
    professor_id: i64,
    activity_id: i64,
    description: Option<String>,
}

impl From<ActivityRecordRow> for ActivityRecord {
    fn from(row: ActivityRecordRow) -> Self {
        ActivityRecord {
            id: row.id,
            professor_id: row.professor_id,
            activity_id: row.activity_id,
            description: row.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ActivityDetailRow {
    id: i64,
    professor_id: i64,
    last_name: String,
    first_name: String,
    third_name: Option<String>,
    activity_id: i64,
    activity_name: String,
    description: Option<String>,
}

impl From<ActivityDetailRow> for ActivityRecordDetail {
    fn from(row: ActivityDetailRow) -> Self {
        ActivityRecordDetail {
            id: row.id,
            professor: ProfessorRef {
                id: row.professor_id,
                last_name: row.last_name,
                first_name: row.first_name,
                third_name: row.third_name,
            },
            activity: LookupEntry::new(row.activity_id, row.activity_name),
            description: row.description,
        }
    }
}

const DETAIL_SELECT: &str = "SELECT poa.id, \
        p.id AS professor_id, p.last_name, p.first_name, p.third_name, \
        a.id AS activity_id, a.name AS activity_name, poa.description \
     FROM professor_other_activity poa \
     JOIN professor p ON p.id = poa.professor_id \
     JOIN other_activity a ON a.id = poa.activity_id";

/// PostgreSQL repository for professor-activity records.
pub struct PgActivityRecordRepository {
    pool: Arc<PgPool>,
}

impl PgActivityRecordRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRecordRepository for PgActivityRecordRepository {
    async fn create(&self, new_record: NewActivityRecord) -> Result<ActivityRecord, AppError> {
        let row = sqlx::query_as::<_, ActivityRecordRow>(
            "INSERT INTO professor_other_activity (professor_id, activity_id, description) \
             VALUES ($1, $2, $3) \
             RETURNING id, professor_id, activity_id, description",
        )
        .bind(new_record.professor_id)
        .bind(new_record.activity_id)
        .bind(&new_record.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityRecord>, AppError> {
        let row = sqlx::query_as::<_, ActivityRecordRow>(
            "SELECT id, professor_id, activity_id, description \
             FROM professor_other_activity WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_detail(&self, id: i64) -> Result<Option<ActivityRecordDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} WHERE poa.id = $1");

        let row = sqlx::query_as::<_, ActivityDetailRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_pair(
        &self,
        professor_id: i64,
        activity_id: i64,
    ) -> Result<Option<ActivityRecord>, AppError> {
        let row = sqlx::query_as::<_, ActivityRecordRow>(
            "SELECT id, professor_id, activity_id, description \
             FROM professor_other_activity \
             WHERE professor_id = $1 AND activity_id = $2",
        )
        .bind(professor_id)
        .bind(activity_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_detailed(&self) -> Result<Vec<ActivityRecordDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} ORDER BY poa.id");

        let rows = sqlx::query_as::<_, ActivityDetailRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_professor(
        &self,
        professor_id: i64,
    ) -> Result<Vec<ActivityRecordDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} WHERE poa.professor_id = $1 ORDER BY poa.id");

        let rows = sqlx::query_as::<_, ActivityDetailRow>(&sql)
            .bind(professor_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i64,
        new_record: NewActivityRecord,
    ) -> Result<Option<ActivityRecord>, AppError> {
        let row = sqlx::query_as::<_, ActivityRecordRow>(
            "UPDATE professor_other_activity \
             SET professor_id = $2, activity_id = $3, description = $4 \
             WHERE id = $1 \
             RETURNING id, professor_id, activity_id, description",
        )
        .bind(id)
        .bind(new_record.professor_id)
        .bind(new_record.activity_id)
        .bind(&new_record.description)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM professor_other_activity WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
