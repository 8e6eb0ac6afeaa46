//! Professor service: reference resolution and read expansion.

use crate::domain::entities::{NewProfessor, Professor, ProfessorDetail};
use crate::domain::repositories::{
    ActivityRecordRepository, AssignmentRepository, LookupRepository, ProfessorRepository,
    WorkTimeRepository,
};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for professor records.
///
/// Writes carry bare reference ids; every id is resolved against its table
/// before the row is written, so a missing reference fails as a validation
/// error instead of a storage error. Reads expand all references and attach
/// the professor's assignments and activity records.
pub struct ProfessorService {
    professors: Arc<dyn ProfessorRepository>,
    offices: Arc<dyn LookupRepository>,
    degrees: Arc<dyn LookupRepository>,
    positions: Arc<dyn LookupRepository>,
    work_times: Arc<dyn WorkTimeRepository>,
    assignments: Arc<dyn AssignmentRepository>,
    activities: Arc<dyn ActivityRecordRepository>,
}

impl ProfessorService {
    pub fn new(
        professors: Arc<dyn ProfessorRepository>,
        offices: Arc<dyn LookupRepository>,
        degrees: Arc<dyn LookupRepository>,
        positions: Arc<dyn LookupRepository>,
        work_times: Arc<dyn WorkTimeRepository>,
        assignments: Arc<dyn AssignmentRepository>,
        activities: Arc<dyn ActivityRecordRepository>,
    ) -> Self {
        Self {
            professors,
            offices,
            degrees,
            positions,
            work_times,
            assignments,
            activities,
        }
    }

    /// Creates a professor and returns the expanded record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced id does not exist.
    /// Returns [`AppError::Conflict`] if the email or phone number is taken.
    /// Returns [`AppError::Internal`] on unexpected database errors.
    pub async fn create(&self, new_professor: NewProfessor) -> Result<ProfessorDetail, AppError> {
        self.resolve_references(&new_professor).await?;

        let created = self.professors.create(new_professor).await?;
        tracing::info!("professor created: {} (id {})", created.display_name(), created.id);

        self.expand(created).await
    }

    /// Retrieves a professor with references, assignments and activities
    /// expanded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the professor does not exist.
    pub async fn get(&self, id: i64) -> Result<ProfessorDetail, AppError> {
        let professor = self
            .professors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Professor not found", json!({"id": id})))?;

        self.expand(professor).await
    }

    /// Lists all professors in expanded form.
    pub async fn list(&self) -> Result<Vec<ProfessorDetail>, AppError> {
        let professors = self.professors.list().await?;

        let mut details = Vec::with_capacity(professors.len());
        for professor in professors {
            details.push(self.expand(professor).await?);
        }
        Ok(details)
    }

    /// Fully replaces a professor and returns the expanded record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the professor does not exist.
    /// Returns [`AppError::Validation`] if a referenced id does not exist.
    /// Returns [`AppError::Conflict`] if the email or phone number is taken.
    pub async fn update(
        &self,
        id: i64,
        new_professor: NewProfessor,
    ) -> Result<ProfessorDetail, AppError> {
        self.resolve_references(&new_professor).await?;

        let updated = self
            .professors
            .update(id, new_professor)
            .await?
            .ok_or_else(|| AppError::not_found("Professor not found", json!({"id": id})))?;

        self.expand(updated).await
    }

    /// Deletes a professor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the professor does not exist.
    /// Returns [`AppError::Conflict`] if assignments or activity records
    /// still reference the professor.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.professors.delete(id).await? {
            return Err(AppError::not_found(
                "Professor not found",
                json!({"id": id}),
            ));
        }
        Ok(())
    }

    /// Checks that every referenced id exists before a write.
    async fn resolve_references(&self, new_professor: &NewProfessor) -> Result<(), AppError> {
        if self
            .positions
            .find_by_id(new_professor.position_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Unknown position",
                json!({"position": new_professor.position_id}),
            ));
        }

        if self
            .work_times
            .find_by_id(new_professor.work_time_id)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Unknown work time",
                json!({"work_time": new_professor.work_time_id}),
            ));
        }

        if let Some(office_id) = new_professor.office_id
            && self.offices.find_by_id(office_id).await?.is_none()
        {
            return Err(AppError::bad_request(
                "Unknown office",
                json!({"office": office_id}),
            ));
        }

        if let Some(degree_id) = new_professor.degree_id
            && self.degrees.find_by_id(degree_id).await?.is_none()
        {
            return Err(AppError::bad_request(
                "Unknown degree",
                json!({"degree": degree_id}),
            ));
        }

        Ok(())
    }

    /// Expands a stored row into the full read form.
    ///
    /// RESTRICT foreign keys guarantee referenced rows exist; a miss here
    /// means the invariant is broken and surfaces as a 500.
    async fn expand(&self, professor: Professor) -> Result<ProfessorDetail, AppError> {
        let office = match professor.office_id {
            Some(office_id) => Some(
                self.offices
                    .find_by_id(office_id)
                    .await?
                    .ok_or_else(|| dangling("office", office_id))?,
            ),
            None => None,
        };

        let degree = match professor.degree_id {
            Some(degree_id) => Some(
                self.degrees
                    .find_by_id(degree_id)
                    .await?
                    .ok_or_else(|| dangling("degree", degree_id))?,
            ),
            None => None,
        };

        let position = self
            .positions
            .find_by_id(professor.position_id)
            .await?
            .ok_or_else(|| dangling("position", professor.position_id))?;

        let work_time = self
            .work_times
            .find_by_id(professor.work_time_id)
            .await?
            .ok_or_else(|| dangling("work_time", professor.work_time_id))?;

        let disciplines = self.assignments.list_for_professor(professor.id).await?;
        let activities = self.activities.list_for_professor(professor.id).await?;

        Ok(ProfessorDetail {
            professor,
            office,
            degree,
            position,
            work_time,
            disciplines,
            activities,
        })
    }
}

fn dangling(field: &str, id: i64) -> AppError {
    AppError::internal("Dangling reference", json!({ "field": field, "id": id }))
}
