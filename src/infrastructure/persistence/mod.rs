//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries are bound at runtime; row structs derive `FromRow` and are mapped
//! into domain entities at the module boundary.
//!
//! # Repositories
//!
//! - [`PgLookupRepository`] - one instance per string-valued reference table
//! - [`PgWorkTimeRepository`] - work-time fractions
//! - [`PgProfessorRepository`] - professor records
//! - [`PgAssignmentRepository`] - professor-discipline assignments
//! - [`PgActivityRecordRepository`] - professor-activity records

pub mod pg_activity_repository;
pub mod pg_assignment_repository;
pub mod pg_lookup_repository;
pub mod pg_professor_repository;
pub mod pg_work_time_repository;

pub use pg_activity_repository::PgActivityRecordRepository;
pub use pg_assignment_repository::PgAssignmentRepository;
pub use pg_lookup_repository::{
    DEGREES, DISCIPLINES, LookupTable, OFFICES, OTHER_ACTIVITIES, POSITIONS, PgLookupRepository,
    TEACHING_TYPES,
};
pub use pg_professor_repository::PgProfessorRepository;
pub use pg_work_time_repository::PgWorkTimeRepository;
