//! PostgreSQL implementation of the professor repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProfessor, Professor};
use crate::domain::repositories::ProfessorRepository;
use crate::error::AppError;

const PROFESSOR_COLUMNS: &str = "id, first_name, last_name, third_name, birth_date, \
     email, phone_number, office_id, degree_id, position_id, work_time_id";

#[derive(sqlx::FromRow)]
struct ProfessorRow {
    id: i64,
    first_name: String,
    last_name: String,
    third_name: Option<String>,
    birth_date: NaiveDate,
    email: String,
    phone_number: String,
    office_id: Option<i64>,
    degree_id: Option<i64>,
    position_id: i64,
    work_time_id: i64,
}

impl From<ProfessorRow> for Professor {
    fn from(row: ProfessorRow) -> Self {
        Professor {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            third_name: row.third_name,
            birth_date: row.birth_date,
            email: row.email,
            phone_number: row.phone_number,
            office_id: row.office_id,
            degree_id: row.degree_id,
            position_id: row.position_id,
            work_time_id: row.work_time_id,
        }
    }
}

/// PostgreSQL repository for professor records.
pub struct PgProfessorRepository {
    pool: Arc<PgPool>,
}

impl PgProfessorRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfessorRepository for PgProfessorRepository {
    async fn create(&self, new_professor: NewProfessor) -> Result<Professor, AppError> {
        let sql = format!(
            "INSERT INTO professor \
                 (first_name, last_name, third_name, birth_date, email, phone_number, \
                  office_id, degree_id, position_id, work_time_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PROFESSOR_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProfessorRow>(&sql)
            .bind(&new_professor.first_name)
            .bind(&new_professor.last_name)
            .bind(&new_professor.third_name)
            .bind(new_professor.birth_date)
            .bind(&new_professor.email)
            .bind(&new_professor.phone_number)
            .bind(new_professor.office_id)
            .bind(new_professor.degree_id)
            .bind(new_professor.position_id)
            .bind(new_professor.work_time_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, AppError> {
        let sql = format!("SELECT {PROFESSOR_COLUMNS} FROM professor WHERE id = $1");

        let row = sqlx::query_as::<_, ProfessorRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Professor>, AppError> {
        let sql = format!("SELECT {PROFESSOR_COLUMNS} FROM professor ORDER BY id");

        let rows = sqlx::query_as::<_, ProfessorRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i64,
        new_professor: NewProfessor,
    ) -> Result<Option<Professor>, AppError> {
        let sql = format!(
            "UPDATE professor SET \
                 first_name = $2, last_name = $3, third_name = $4, birth_date = $5, \
                 email = $6, phone_number = $7, office_id = $8, degree_id = $9, \
                 position_id = $10, work_time_id = $11 \
             WHERE id = $1 \
             RETURNING {PROFESSOR_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ProfessorRow>(&sql)
            .bind(id)
            .bind(&new_professor.first_name)
            .bind(&new_professor.last_name)
            .bind(&new_professor.third_name)
            .bind(new_professor.birth_date)
            .bind(&new_professor.email)
            .bind(&new_professor.phone_number)
            .bind(new_professor.office_id)
            .bind(new_professor.degree_id)
            .bind(new_professor.position_id)
            .bind(new_professor.work_time_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM professor WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
