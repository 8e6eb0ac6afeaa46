//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::lookup_service::LookupService`] - reference table CRUD (one instance per table)
//! - [`services::work_time_service::WorkTimeService`] - work-time fraction CRUD
//! - [`services::professor_service::ProfessorService`] - professor CRUD with read expansion
//! - [`services::assignment_service::AssignmentService`] - professor-discipline associations
//! - [`services::activity_service::ActivityRecordService`] - professor-activity associations

pub mod services;
