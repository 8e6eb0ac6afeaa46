//! Repository trait for teaching assignments.

use crate::domain::entities::{NewTeachingAssignment, TeachingAssignment, TeachingAssignmentDetail};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the professor-discipline association table.
///
/// Detail queries join the three referenced tables and return expanded rows;
/// they back every read path (the raw ids are write-only on the wire).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Inserts a new assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the triple already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(
        &self,
        new_assignment: NewTeachingAssignment,
    ) -> Result<TeachingAssignment, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TeachingAssignment>, AppError>;

    /// Finds an assignment with its references expanded.
    async fn find_detail(&self, id: i64) -> Result<Option<TeachingAssignmentDetail>, AppError>;

    /// Finds an assignment by its unique triple.
    async fn find_by_triple(
        &self,
        professor_id: i64,
        discipline_id: i64,
        teaching_type_id: i64,
    ) -> Result<Option<TeachingAssignment>, AppError>;

    /// Lists all assignments with references expanded, ordered by id.
    async fn list_detailed(&self) -> Result<Vec<TeachingAssignmentDetail>, AppError>;

    /// Lists a professor's assignments with references expanded.
    async fn list_for_professor(
        &self,
        professor_id: i64,
    ) -> Result<Vec<TeachingAssignmentDetail>, AppError>;

    /// Lists a discipline's assignments with references expanded.
    async fn list_for_discipline(
        &self,
        discipline_id: i64,
    ) -> Result<Vec<TeachingAssignmentDetail>, AppError>;

    /// Fully replaces an assignment. Returns `Ok(None)` if no row matches.
    async fn update(
        &self,
        id: i64,
        new_assignment: NewTeachingAssignment,
    ) -> Result<Option<TeachingAssignment>, AppError>;

    /// Deletes an assignment. Returns `Ok(false)` if no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
