//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod activities;
pub mod assignments;
pub mod disciplines;
pub mod health;
pub mod lookups;
pub mod professors;
pub mod work_times;

pub use activities::{
    activity_record_list_handler, create_activity_record_handler, delete_activity_record_handler,
    retrieve_activity_record_handler, update_activity_record_handler,
};
pub use assignments::{
    assignment_list_handler, create_assignment_handler, delete_assignment_handler,
    retrieve_assignment_handler, update_assignment_handler,
};
pub use disciplines::retrieve_discipline_handler;
pub use health::health_handler;
pub use lookups::{
    Activities, Degrees, Disciplines, LookupResource, Offices, Positions, TeachingTypes,
    create_lookup_handler, delete_lookup_handler, list_lookup_handler, retrieve_lookup_handler,
    update_lookup_handler,
};
pub use professors::{
    create_professor_handler, delete_professor_handler, professor_list_handler,
    retrieve_professor_handler, update_professor_handler,
};
pub use work_times::{
    create_work_time_handler, delete_work_time_handler, retrieve_work_time_handler,
    update_work_time_handler, work_time_list_handler,
};
