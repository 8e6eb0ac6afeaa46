//! Business logic services for the application layer.

pub mod activity_service;
pub mod assignment_service;
pub mod lookup_service;
pub mod professor_service;
pub mod work_time_service;

pub use activity_service::ActivityRecordService;
pub use assignment_service::AssignmentService;
pub use lookup_service::LookupService;
pub use professor_service::ProfessorService;
pub use work_time_service::WorkTimeService;
