//! Repository trait for the work-time reference table.

use crate::domain::entities::WorkTime;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for work-time fractions.
///
/// Same contract as [`super::LookupRepository`], but the unique scalar is a
/// float rather than a string.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkTimeRepository: Send + Sync {
    /// Inserts a new fraction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the value already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, value: f64) -> Result<WorkTime, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<WorkTime>, AppError>;

    async fn find_by_value(&self, value: f64) -> Result<Option<WorkTime>, AppError>;

    async fn list(&self) -> Result<Vec<WorkTime>, AppError>;

    /// Returns `Ok(None)` if no row matches `id`.
    async fn update(&self, id: i64, value: f64) -> Result<Option<WorkTime>, AppError>;

    /// Returns `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the row is still referenced.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
