//! Repository trait shared by the string-valued reference tables.

use crate::domain::entities::LookupEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for a single string-valued reference table
/// (office, degree, position, discipline, teaching type, other activity).
///
/// One implementation instance is bound to one table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLookupRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// Inserts a new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the value already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, value: &str) -> Result<LookupEntry, AppError>;

    /// Finds an entry by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<LookupEntry>, AppError>;

    /// Finds an entry by its unique value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_value(&self, value: &str) -> Result<Option<LookupEntry>, AppError>;

    /// Lists all entries ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<LookupEntry>, AppError>;

    /// Replaces the value of an existing entry.
    ///
    /// Returns `Ok(None)` if no row matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new value already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, value: &str) -> Result<Option<LookupEntry>, AppError>;

    /// Deletes an entry. Returns `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the row is still referenced
    /// (all foreign keys are RESTRICT).
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
