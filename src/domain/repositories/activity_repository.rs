//! Repository trait for professor activity records.

use crate::domain::entities::{ActivityRecord, ActivityRecordDetail, NewActivityRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the professor-activity association table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRecordRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the (professor, activity) pair
    /// already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_record: NewActivityRecord) -> Result<ActivityRecord, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityRecord>, AppError>;

    /// Finds a record with professor and activity expanded.
    async fn find_detail(&self, id: i64) -> Result<Option<ActivityRecordDetail>, AppError>;

    /// Finds a record by its unique (professor, activity) pair.
    async fn find_by_pair(
        &self,
        professor_id: i64,
        activity_id: i64,
    ) -> Result<Option<ActivityRecord>, AppError>;

    /// Lists all records with references expanded, ordered by id.
    async fn list_detailed(&self) -> Result<Vec<ActivityRecordDetail>, AppError>;

    /// Lists a professor's activity records with references expanded.
    async fn list_for_professor(
        &self,
        professor_id: i64,
    ) -> Result<Vec<ActivityRecordDetail>, AppError>;

    /// Fully replaces a record. Returns `Ok(None)` if no row matches.
    async fn update(
        &self,
        id: i64,
        new_record: NewActivityRecord,
    ) -> Result<Option<ActivityRecord>, AppError>;

    /// Deletes a record. Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
