//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`LookupRepository`] - one instance per string-valued reference table
//! - [`WorkTimeRepository`] - the float-valued reference table
//! - [`ProfessorRepository`] - professor CRUD
//! - [`AssignmentRepository`] - professor-discipline associations
//! - [`ActivityRecordRepository`] - professor-activity associations

pub mod activity_repository;
pub mod assignment_repository;
pub mod lookup_repository;
pub mod professor_repository;
pub mod work_time_repository;

pub use activity_repository::ActivityRecordRepository;
pub use assignment_repository::AssignmentRepository;
pub use lookup_repository::LookupRepository;
pub use professor_repository::ProfessorRepository;
pub use work_time_repository::WorkTimeRepository;

#[cfg(test)]
pub use activity_repository::MockActivityRecordRepository;
#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(test)]
pub use lookup_repository::MockLookupRepository;
#[cfg(test)]
pub use professor_repository::MockProfessorRepository;
#[cfg(test)]
pub use work_time_repository::MockWorkTimeRepository;
