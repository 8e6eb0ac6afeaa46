//! Repository trait for professor records.

use crate::domain::entities::{NewProfessor, Professor};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the professor table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProfessorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfessorRepository: Send + Sync {
    /// Inserts a new professor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email or phone number is
    /// already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_professor: NewProfessor) -> Result<Professor, AppError>;

    /// Finds a professor by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Professor>, AppError>;

    /// Lists all professors ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Professor>, AppError>;

    /// Fully replaces a professor row. Returns `Ok(None)` if no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on email/phone uniqueness violations.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        new_professor: NewProfessor,
    ) -> Result<Option<Professor>, AppError>;

    /// Deletes a professor. Returns `Ok(false)` if no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the professor still has
    /// assignments or activity records.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
