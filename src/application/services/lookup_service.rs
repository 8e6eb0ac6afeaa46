//! CRUD service shared by the string-valued reference resources.

use crate::domain::entities::LookupEntry;
use crate::domain::repositories::LookupRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for one reference table (office, degree, position, discipline,
/// teaching type or other activity).
///
/// Validates the single scalar field (non-empty, bounded length, unique)
/// and resolves ids to rows. The `noun` names the resource in error
/// payloads; `max_len` mirrors the column width.
pub struct LookupService {
    repository: Arc<dyn LookupRepository>,
    noun: &'static str,
    max_len: usize,
}

impl LookupService {
    pub fn new(repository: Arc<dyn LookupRepository>, noun: &'static str, max_len: usize) -> Self {
        Self {
            repository,
            noun,
            max_len,
        }
    }

    /// Creates a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is empty or too long.
    /// Returns [`AppError::Conflict`] if the value already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, value: String) -> Result<LookupEntry, AppError> {
        self.validate_value(&value)?;

        if self.repository.find_by_value(&value).await?.is_some() {
            return Err(AppError::conflict(
                format!("{} already exists", capitalize(self.noun)),
                json!({ self.noun: value }),
            ));
        }

        self.repository.create(&value).await
    }

    /// Retrieves an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn get(&self, id: i64) -> Result<LookupEntry, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("{} not found", capitalize(self.noun)), json!({"id": id}))
        })
    }

    /// Lists all entries.
    pub async fn list(&self) -> Result<Vec<LookupEntry>, AppError> {
        self.repository.list().await
    }

    /// Replaces the value of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is empty or too long.
    /// Returns [`AppError::Conflict`] if another entry already holds the value.
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn update(&self, id: i64, value: String) -> Result<LookupEntry, AppError> {
        self.validate_value(&value)?;

        if let Some(existing) = self.repository.find_by_value(&value).await?
            && existing.id != id
        {
            return Err(AppError::conflict(
                format!("{} already exists", capitalize(self.noun)),
                json!({ self.noun: value }),
            ));
        }

        self.repository.update(id, &value).await?.ok_or_else(|| {
            AppError::not_found(format!("{} not found", capitalize(self.noun)), json!({"id": id}))
        })
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    /// Returns [`AppError::Conflict`] if the entry is still referenced.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(
                format!("{} not found", capitalize(self.noun)),
                json!({"id": id}),
            ));
        }
        Ok(())
    }

    fn validate_value(&self, value: &str) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::bad_request(
                format!("{} value must not be empty", capitalize(self.noun)),
                json!({ "field": self.noun }),
            ));
        }

        if value.chars().count() > self.max_len {
            return Err(AppError::bad_request(
                format!("{} value is too long", capitalize(self.noun)),
                json!({ "max": self.max_len }),
            ));
        }

        Ok(())
    }
}

fn capitalize(noun: &str) -> String {
    let mut chars = noun.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLookupRepository;

    fn service(mock: MockLookupRepository) -> LookupService {
        LookupService::new(Arc::new(mock), "office", 5)
    }

    #[tokio::test]
    async fn test_create_success() {
        let mut mock = MockLookupRepository::new();

        mock.expect_find_by_value()
            .withf(|v| v == "101")
            .times(1)
            .returning(|_| Ok(None));
        mock.expect_create()
            .times(1)
            .returning(|v| Ok(LookupEntry::new(1, v.to_string())));

        let result = service(mock).create("101".to_string()).await;

        let entry = result.unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.value, "101");
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let mut mock = MockLookupRepository::new();

        mock.expect_find_by_value()
            .times(1)
            .returning(|v| Ok(Some(LookupEntry::new(3, v.to_string()))));

        let result = service(mock).create("101".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_empty_value() {
        let result = service(MockLookupRepository::new())
            .create(String::new())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_value_too_long() {
        // max_len is 5 for the office service under test
        let result = service(MockLookupRepository::new())
            .create("123456".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut mock = MockLookupRepository::new();
        mock.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = service(mock).get(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_own_value() {
        let mut mock = MockLookupRepository::new();

        // The entry already holds the value; same id must not conflict.
        mock.expect_find_by_value()
            .times(1)
            .returning(|v| Ok(Some(LookupEntry::new(7, v.to_string()))));
        mock.expect_update()
            .times(1)
            .returning(|id, v| Ok(Some(LookupEntry::new(id, v.to_string()))));

        let result = service(mock).update(7, "101".to_string()).await;

        assert_eq!(result.unwrap().id, 7);
    }

    #[tokio::test]
    async fn test_update_conflicts_with_other_entry() {
        let mut mock = MockLookupRepository::new();

        mock.expect_find_by_value()
            .times(1)
            .returning(|v| Ok(Some(LookupEntry::new(3, v.to_string()))));

        let result = service(mock).update(7, "101".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut mock = MockLookupRepository::new();
        mock.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(mock).delete(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
