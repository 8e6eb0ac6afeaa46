//! Core domain entities representing the registry data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`LookupEntry`] - a row of any string-valued reference table
//! - [`WorkTime`] - the float-valued work-time reference table
//! - [`Professor`] - the primary record
//! - [`TeachingAssignment`] - professor × discipline × teaching type
//! - [`ActivityRecord`] - professor × other activity
//!
//! # Design Pattern
//!
//! Creation inputs use separate `New*` structs; expanded read forms use
//! `*Detail` structs with references resolved to full objects.

pub mod activity;
pub mod assignment;
pub mod lookup;
pub mod professor;
pub mod work_time;

pub use activity::{ActivityRecord, ActivityRecordDetail, NewActivityRecord};
pub use assignment::{NewTeachingAssignment, TeachingAssignment, TeachingAssignmentDetail};
pub use lookup::LookupEntry;
pub use professor::{NewProfessor, Professor, ProfessorDetail, ProfessorRef};
pub use work_time::WorkTime;
