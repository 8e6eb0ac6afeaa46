//! Teaching assignment service.

use crate::domain::entities::{NewTeachingAssignment, TeachingAssignmentDetail};
use crate::domain::repositories::{
    AssignmentRepository, LookupRepository, ProfessorRepository,
};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for professor-discipline assignments.
///
/// All three referenced ids must exist, and the (professor, discipline,
/// teaching type) triple must be unique. Reads always return the expanded
/// form; the raw ids stay write-only.
pub struct AssignmentService {
    assignments: Arc<dyn AssignmentRepository>,
    professors: Arc<dyn ProfessorRepository>,
    disciplines: Arc<dyn LookupRepository>,
    teaching_types: Arc<dyn LookupRepository>,
}

impl AssignmentService {
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        professors: Arc<dyn ProfessorRepository>,
        disciplines: Arc<dyn LookupRepository>,
        teaching_types: Arc<dyn LookupRepository>,
    ) -> Self {
        Self {
            assignments,
            professors,
            disciplines,
            teaching_types,
        }
    }

    /// Creates an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced id does not exist.
    /// Returns [`AppError::Conflict`] if the triple already exists.
    pub async fn create(
        &self,
        new_assignment: NewTeachingAssignment,
    ) -> Result<TeachingAssignmentDetail, AppError> {
        self.resolve_references(&new_assignment).await?;
        self.check_duplicate(&new_assignment, None).await?;

        let created = self.assignments.create(new_assignment).await?;

        self.assignments
            .find_detail(created.id)
            .await?
            .ok_or_else(|| {
                AppError::internal("Assignment vanished after insert", json!({"id": created.id}))
            })
    }

    /// Retrieves an assignment in expanded form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the assignment does not exist.
    pub async fn get(&self, id: i64) -> Result<TeachingAssignmentDetail, AppError> {
        self.assignments
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Assignment not found", json!({"id": id})))
    }

    /// Lists all assignments in expanded form.
    pub async fn list(&self) -> Result<Vec<TeachingAssignmentDetail>, AppError> {
        self.assignments.list_detailed().await
    }

    /// Lists the assignments of one discipline in expanded form.
    pub async fn list_for_discipline(
        &self,
        discipline_id: i64,
    ) -> Result<Vec<TeachingAssignmentDetail>, AppError> {
        self.assignments.list_for_discipline(discipline_id).await
    }

    /// Fully replaces an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the assignment does not exist.
    /// Returns [`AppError::Validation`] if a referenced id does not exist.
    /// Returns [`AppError::Conflict`] if the new triple collides with
    /// another assignment.
    pub async fn update(
        &self,
        id: i64,
        new_assignment: NewTeachingAssignment,
    ) -> Result<TeachingAssignmentDetail, AppError> {
        self.resolve_references(&new_assignment).await?;
        self.check_duplicate(&new_assignment, Some(id)).await?;

        let updated = self
            .assignments
            .update(id, new_assignment)
            .await?
            .ok_or_else(|| AppError::not_found("Assignment not found", json!({"id": id})))?;

        self.assignments
            .find_detail(updated.id)
            .await?
            .ok_or_else(|| {
                AppError::internal("Assignment vanished after update", json!({"id": updated.id}))
            })
    }

    /// Deletes an assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the assignment does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.assignments.delete(id).await? {
            return Err(AppError::not_found(
                "Assignment not found",
                json!({"id": id}),
            ));
        }
        Ok(())
    }

    async fn resolve_references(
        &self,
        new_assignment: &NewTeachingAssignment,
    ) -> Result<(), AppError> {
        if self
            .professors
            .find_by_id(new_assignment.professor_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Unknown professor",
                json!({"professor": new_assignment.professor_id}),
            ));
        }

        if self
            .disciplines
            .find_by_id(new_assignment.discipline_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Unknown discipline",
                json!({"discipline": new_assignment.discipline_id}),
            ));
        }

        if self
            .teaching_types
            .find_by_id(new_assignment.teaching_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Unknown teaching type",
                json!({"teaching_type": new_assignment.teaching_type_id}),
            ));
        }

        Ok(())
    }

    async fn check_duplicate(
        &self,
        new_assignment: &NewTeachingAssignment,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(existing) = self
            .assignments
            .find_by_triple(
                new_assignment.professor_id,
                new_assignment.discipline_id,
                new_assignment.teaching_type_id,
            )
            .await?
            && Some(existing.id) != exclude_id
        {
            return Err(AppError::conflict(
                "Professor already teaches this discipline in this mode",
                json!({
                    "professor": new_assignment.professor_id,
                    "discipline": new_assignment.discipline_id,
                    "teaching_type": new_assignment.teaching_type_id,
                }),
            ));
        }
        Ok(())
    }
}
