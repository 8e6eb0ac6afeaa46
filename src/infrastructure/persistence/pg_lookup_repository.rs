//! PostgreSQL implementation shared by the string-valued reference tables.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::LookupEntry;
use crate::domain::repositories::LookupRepository;
use crate::error::AppError;

/// Identifies which reference table an instance serves.
///
/// Identifiers are compile-time constants, never user input, so they can be
/// interpolated into SQL text directly; values always go through binds.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    pub table: &'static str,
    pub column: &'static str,
}

pub const OFFICES: LookupTable = LookupTable {
    table: "office",
    column: "number",
};
pub const DEGREES: LookupTable = LookupTable {
    table: "degree",
    column: "name",
};
pub const POSITIONS: LookupTable = LookupTable {
    table: "position",
    column: "name",
};
pub const DISCIPLINES: LookupTable = LookupTable {
    table: "discipline",
    column: "name",
};
pub const TEACHING_TYPES: LookupTable = LookupTable {
    table: "teaching_type",
    column: "name",
};
pub const OTHER_ACTIVITIES: LookupTable = LookupTable {
    table: "other_activity",
    column: "name",
};

#[derive(sqlx::FromRow)]
struct LookupRow {
    id: i64,
    value: String,
}

impl From<LookupRow> for LookupEntry {
    fn from(row: LookupRow) -> Self {
        LookupEntry::new(row.id, row.value)
    }
}

/// PostgreSQL repository for one reference table.
///
/// The same implementation serves all six string-valued tables; each
/// service instance is constructed with its own [`LookupTable`].
pub struct PgLookupRepository {
    pool: Arc<PgPool>,
    table: LookupTable,
}

impl PgLookupRepository {
    /// Creates a repository bound to one reference table.
    pub fn new(pool: Arc<PgPool>, table: LookupTable) -> Self {
        Self { pool, table }
    }
}

#[async_trait]
impl LookupRepository for PgLookupRepository {
    async fn create(&self, value: &str) -> Result<LookupEntry, AppError> {
        let LookupTable { table, column } = self.table;
        let sql =
            format!("INSERT INTO {table} ({column}) VALUES ($1) RETURNING id, {column} AS value");

        let row = sqlx::query_as::<_, LookupRow>(&sql)
            .bind(value)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<LookupEntry>, AppError> {
        let LookupTable { table, column } = self.table;
        let sql = format!("SELECT id, {column} AS value FROM {table} WHERE id = $1");

        let row = sqlx::query_as::<_, LookupRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<LookupEntry>, AppError> {
        let LookupTable { table, column } = self.table;
        let sql = format!("SELECT id, {column} AS value FROM {table} WHERE {column} = $1");

        let row = sqlx::query_as::<_, LookupRow>(&sql)
            .bind(value)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<LookupEntry>, AppError> {
        let LookupTable { table, column } = self.table;
        let sql = format!("SELECT id, {column} AS value FROM {table} ORDER BY id");

        let rows = sqlx::query_as::<_, LookupRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, value: &str) -> Result<Option<LookupEntry>, AppError> {
        let LookupTable { table, column } = self.table;
        let sql = format!(
            "UPDATE {table} SET {column} = $2 WHERE id = $1 RETURNING id, {column} AS value"
        );

        let row = sqlx::query_as::<_, LookupRow>(&sql)
            .bind(id)
            .bind(value)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table.table);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
