//! CRUD service for the work-time reference resource.

use crate::domain::entities::WorkTime;
use crate::domain::repositories::WorkTimeRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for work-time fractions.
///
/// Same contract as [`super::LookupService`], for the one float-valued
/// reference table.
pub struct WorkTimeService {
    repository: Arc<dyn WorkTimeRepository>,
}

impl WorkTimeService {
    pub fn new(repository: Arc<dyn WorkTimeRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new fraction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is not finite.
    /// Returns [`AppError::Conflict`] if the value already exists.
    pub async fn create(&self, value: f64) -> Result<WorkTime, AppError> {
        validate_value(value)?;

        if self.repository.find_by_value(value).await?.is_some() {
            return Err(AppError::conflict(
                "Work time already exists",
                json!({ "value": value }),
            ));
        }

        self.repository.create(value).await
    }

    /// Retrieves a fraction by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn get(&self, id: i64) -> Result<WorkTime, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Work time not found", json!({"id": id})))
    }

    pub async fn list(&self) -> Result<Vec<WorkTime>, AppError> {
        self.repository.list().await
    }

    /// Replaces the value of an existing entry.
    pub async fn update(&self, id: i64, value: f64) -> Result<WorkTime, AppError> {
        validate_value(value)?;

        if let Some(existing) = self.repository.find_by_value(value).await?
            && existing.id != id
        {
            return Err(AppError::conflict(
                "Work time already exists",
                json!({ "value": value }),
            ));
        }

        self.repository
            .update(id, value)
            .await?
            .ok_or_else(|| AppError::not_found("Work time not found", json!({"id": id})))
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Conflict`] if a professor still references it.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                "Work time not found",
                json!({"id": id}),
            ));
        }
        Ok(())
    }
}

fn validate_value(value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::bad_request(
            "Work time value must be a finite number",
            json!({ "field": "name" }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockWorkTimeRepository;

    #[tokio::test]
    async fn test_create_success() {
        let mut mock = MockWorkTimeRepository::new();

        mock.expect_find_by_value().times(1).returning(|_| Ok(None));
        mock.expect_create()
            .times(1)
            .returning(|v| Ok(WorkTime::new(1, v)));

        let service = WorkTimeService::new(Arc::new(mock));
        let created = service.create(0.5).await.unwrap();

        assert_eq!(created.value, 0.5);
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let mut mock = MockWorkTimeRepository::new();

        mock.expect_find_by_value()
            .times(1)
            .returning(|v| Ok(Some(WorkTime::new(2, v))));

        let service = WorkTimeService::new(Arc::new(mock));
        let result = service.create(1.0).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_rejects_non_finite() {
        let service = WorkTimeService::new(Arc::new(MockWorkTimeRepository::new()));

        let result = service.create(f64::NAN).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut mock = MockWorkTimeRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = WorkTimeService::new(Arc::new(mock));
        let result = service.get(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
