//! PostgreSQL implementation of the teaching assignment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    LookupEntry, NewTeachingAssignment, ProfessorRef, TeachingAssignment,
    TeachingAssignmentDetail,
};
use crate::domain::repositories::AssignmentRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AssignmentRow {
    id: i64,
    professor_id: i64,
    discipline_id: i64,
    teaching_type_id: i64,
}

impl From<AssignmentRow> for TeachingAssignment {
    fn from(row: AssignmentRow) -> Self {
        TeachingAssignment {
            id: row.id,
            professor_id: row.professor_id,
            discipline_id: row.discipline_id,
            teaching_type_id: row.teaching_type_id,
        }
    }
}

/// Flat join row; column aliases keep the three referenced tables apart.
#[derive(sqlx::FromRow)]
struct AssignmentDetailRow {
    id: i64,
    professor_id: i64,
    last_name: String,
    first_name: String,
    third_name: Option<String>,
    discipline_id: i64,
    discipline_name: String,
    teaching_type_id: i64,
    teaching_type_name: String,
}

impl From<AssignmentDetailRow> for TeachingAssignmentDetail {
    fn from(row: AssignmentDetailRow) -> Self {
        TeachingAssignmentDetail {
            id: row.id,
            professor: ProfessorRef {
                id: row.professor_id,
                last_name: row.last_name,
                first_name: row.first_name,
                third_name: row.third_name,
            },
            discipline: LookupEntry::new(row.discipline_id, row.discipline_name),
            teaching_type: LookupEntry::new(row.teaching_type_id, row.teaching_type_name),
        }
    }
}

const DETAIL_SELECT: &str = "SELECT pd.id, \
        p.id AS professor_id, p.last_name, p.first_name, p.third_name, \
        d.id AS discipline_id, d.name AS discipline_name, \
        tt.id AS teaching_type_id, tt.name AS teaching_type_name \
     FROM professor_discipline pd \
     JOIN professor p ON p.id = pd.professor_id \
     JOIN discipline d ON d.id = pd.discipline_id \
     JOIN teaching_type tt ON tt.id = pd.teaching_type_id";

/// PostgreSQL repository for professor-discipline assignments.
pub struct PgAssignmentRepository {
    pool: Arc<PgPool>,
}

impl PgAssignmentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    async fn create(
        &self,
        new_assignment: NewTeachingAssignment,
    ) -> Result<TeachingAssignment, AppError> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            "INSERT INTO professor_discipline (professor_id, discipline_id, teaching_type_id) \
             VALUES ($1, $2, $3) \
             RETURNING id, professor_id, discipline_id, teaching_type_id",
        )
        .bind(new_assignment.professor_id)
        .bind(new_assignment.discipline_id)
        .bind(new_assignment.teaching_type_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TeachingAssignment>, AppError> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            "SELECT id, professor_id, discipline_id, teaching_type_id \
             FROM professor_discipline WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_detail(&self, id: i64) -> Result<Option<TeachingAssignmentDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} WHERE pd.id = $1");

        let row = sqlx::query_as::<_, AssignmentDetailRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_triple(
        &self,
        professor_id: i64,
        discipline_id: i64,
        teaching_type_id: i64,
    ) -> Result<Option<TeachingAssignment>, AppError> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            "SELECT id, professor_id, discipline_id, teaching_type_id \
             FROM professor_discipline \
             WHERE professor_id = $1 AND discipline_id = $2 AND teaching_type_id = $3",
        )
        .bind(professor_id)
        .bind(discipline_id)
        .bind(teaching_type_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_detailed(&self) -> Result<Vec<TeachingAssignmentDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} ORDER BY pd.id");

        let rows = sqlx::query_as::<_, AssignmentDetailRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_professor(
        &self,
        professor_id: i64,
    ) -> Result<Vec<TeachingAssignmentDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} WHERE pd.professor_id = $1 ORDER BY pd.id");

        let rows = sqlx::query_as::<_, AssignmentDetailRow>(&sql)
            .bind(professor_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_discipline(
        &self,
        discipline_id: i64,
    ) -> Result<Vec<TeachingAssignmentDetail>, AppError> {
        let sql = format!("{DETAIL_SELECT} WHERE pd.discipline_id = $1 ORDER BY pd.id");

        let rows = sqlx::query_as::<_, AssignmentDetailRow>(&sql)
            .bind(discipline_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: i64,
        new_assignment: NewTeachingAssignment,
    ) -> Result<Option<TeachingAssignment>, AppError> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            "UPDATE professor_discipline \
             SET professor_id = $2, discipline_id = $3, teaching_type_id = $4 \
             WHERE id = $1 \
             RETURNING id, professor_id, discipline_id, teaching_type_id",
        )
        .bind(id)
        .bind(new_assignment.professor_id)
        .bind(new_assignment.discipline_id)
        .bind(new_assignment.teaching_type_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM professor_discipline WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
