//! Professor activity record service.

use crate::domain::entities::{ActivityRecordDetail, NewActivityRecord};
use crate::domain::repositories::{
    ActivityRecordRepository, LookupRepository, ProfessorRepository,
};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for professor-activity records.
///
/// The write contract embeds the activity as an object rather than a bare
/// id (the one asymmetric association in the API); the embedded name must
/// resolve to an existing activity. The (professor, activity) pair is
/// unique.
pub struct ActivityRecordService {
    records: Arc<dyn ActivityRecordRepository>,
    professors: Arc<dyn ProfessorRepository>,
    activities: Arc<dyn LookupRepository>,
}

impl ActivityRecordService {
    pub fn new(
        records: Arc<dyn ActivityRecordRepository>,
        professors: Arc<dyn ProfessorRepository>,
        activities: Arc<dyn LookupRepository>,
    ) -> Self {
        Self {
            records,
            professors,
            activities,
        }
    }

    /// Creates a record, resolving the embedded activity by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the professor id or activity
    /// name does not resolve.
    /// Returns [`AppError::Conflict`] if the pair already exists.
    pub async fn create(
        &self,
        professor_id: i64,
        activity_name: &str,
        description: Option<String>,
    ) -> Result<ActivityRecordDetail, AppError> {
        let activity_id = self.resolve_references(professor_id, activity_name).await?;
        self.check_duplicate(professor_id, activity_id, None).await?;

        let created = self
            .records
            .create(NewActivityRecord {
                professor_id,
                activity_id,
                description,
            })
            .await?;

        self.records.find_detail(created.id).await?.ok_or_else(|| {
            AppError::internal("Activity record vanished after insert", json!({"id": created.id}))
        })
    }

    /// Retrieves a record in expanded form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn get(&self, id: i64) -> Result<ActivityRecordDetail, AppError> {
        self.records
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found("Activity record not found", json!({"id": id})))
    }

    /// Lists all records in expanded form.
    pub async fn list(&self) -> Result<Vec<ActivityRecordDetail>, AppError> {
        self.records.list_detailed().await
    }

    /// Fully replaces a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Validation`] if the professor id or activity
    /// name does not resolve.
    /// Returns [`AppError::Conflict`] if the new pair collides with
    /// another record.
    pub async fn update(
        &self,
        id: i64,
        professor_id: i64,
        activity_name: &str,
        description: Option<String>,
    ) -> Result<ActivityRecordDetail, AppError> {
        let activity_id = self.resolve_references(professor_id, activity_name).await?;
        self.check_duplicate(professor_id, activity_id, Some(id))
            .await?;

        let updated = self
            .records
            .update(
                id,
                NewActivityRecord {
                    professor_id,
                    activity_id,
                    description,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Activity record not found", json!({"id": id})))?;

        self.records.find_detail(updated.id).await?.ok_or_else(|| {
            AppError::internal("Activity record vanished after update", json!({"id": updated.id}))
        })
    }

    /// Deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.records.delete(id).await? {
            return Err(AppError::not_found(
                "Activity record not found",
                json!({"id": id}),
            ));
        }
        Ok(())
    }

    /// Resolves the professor id and the embedded activity name; returns
    /// the activity id.
    async fn resolve_references(
        &self,
        professor_id: i64,
        activity_name: &str,
    ) -> Result<i64, AppError> {
        if self.professors.find_by_id(professor_id).await?.is_none() {
            return Err(AppError::bad_request(
                "Unknown professor",
                json!({"professor": professor_id}),
            ));
        }

        let activity = self
            .activities
            .find_by_value(activity_name)
            .await?
            .ok_or_else(|| {
                AppError::bad_request("Unknown activity", json!({"activity": activity_name}))
            })?;

        Ok(activity.id)
    }

    async fn check_duplicate(
        &self,
        professor_id: i64,
        activity_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(existing) = self.records.find_by_pair(professor_id, activity_id).await?
            && Some(existing.id) != exclude_id
        {
            return Err(AppError::conflict(
                "Professor already has this activity",
                json!({ "professor": professor_id, "activity": activity_id }),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ActivityRecord, LookupEntry, Professor, ProfessorRef};
    use crate::domain::repositories::{
        MockActivityRecordRepository, MockLookupRepository, MockProfessorRepository,
    };
    use chrono::NaiveDate;

    fn professor(id: i64) -> Professor {
        Professor {
            id,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            third_name: None,
            birth_date: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            email: "jane@x.edu".to_string(),
            phone_number: "12345678901".to_string(),
            office_id: None,
            degree_id: None,
            position_id: 1,
            work_time_id: 1,
        }
    }

    fn detail(id: i64) -> ActivityRecordDetail {
        ActivityRecordDetail {
            id,
            professor: ProfessorRef {
                id: 1,
                last_name: "Doe".to_string(),
                first_name: "Jane".to_string(),
                third_name: None,
            },
            activity: LookupEntry::new(2, "Curator".to_string()),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_resolves_activity_by_name() {
        let mut records = MockActivityRecordRepository::new();
        let mut professors = MockProfessorRepository::new();
        let mut activities = MockLookupRepository::new();

        professors
            .expect_find_by_id()
            .returning(|id| Ok(Some(professor(id))));
        activities
            .expect_find_by_value()
            .withf(|name| name == "Curator")
            .times(1)
            .returning(|name| Ok(Some(LookupEntry::new(2, name.to_string()))));
        records
            .expect_find_by_pair()
            .times(1)
            .returning(|_, _| Ok(None));
        records.expect_create().times(1).returning(|new| {
            assert_eq!(new.activity_id, 2);
            Ok(ActivityRecord {
                id: 8,
                professor_id: new.professor_id,
                activity_id: new.activity_id,
                description: new.description,
            })
        });
        records
            .expect_find_detail()
            .times(1)
            .returning(|id| Ok(Some(detail(id))));

        let service = ActivityRecordService::new(
            Arc::new(records),
            Arc::new(professors),
            Arc::new(activities),
        );

        let created = service.create(1, "Curator", None).await.unwrap();

        assert_eq!(created.id, 8);
        assert_eq!(created.activity.value, "Curator");
    }

    #[tokio::test]
    async fn test_create_unknown_activity_name() {
        let records = MockActivityRecordRepository::new();
        let mut professors = MockProfessorRepository::new();
        let mut activities = MockLookupRepository::new();

        professors
            .expect_find_by_id()
            .returning(|id| Ok(Some(professor(id))));
        activities
            .expect_find_by_value()
            .times(1)
            .returning(|_| Ok(None));

        let service = ActivityRecordService::new(
            Arc::new(records),
            Arc::new(professors),
            Arc::new(activities),
        );

        let result = service.create(1, "Ghost", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_duplicate_pair() {
        let mut records = MockActivityRecordRepository::new();
        let mut professors = MockProfessorRepository::new();
        let mut activities = MockLookupRepository::new();

        professors
            .expect_find_by_id()
            .returning(|id| Ok(Some(professor(id))));
        activities
            .expect_find_by_value()
            .times(1)
            .returning(|name| Ok(Some(LookupEntry::new(2, name.to_string()))));
        records.expect_find_by_pair().times(1).returning(|p, a| {
            Ok(Some(ActivityRecord {
                id: 4,
                professor_id: p,
                activity_id: a,
                description: None,
            }))
        });

        let service = ActivityRecordService::new(
            Arc::new(records),
            Arc::new(professors),
            Arc::new(activities),
        );

        let result = service.create(1, "Curator", None).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }
}
